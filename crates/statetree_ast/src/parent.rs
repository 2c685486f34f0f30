//! Parent back-references.
//!
//! Nodes are created without a parent. [`bind_parents`] fills in the parent
//! slot of every descendant of a root after the tree is built.
//!
//! Rebuilding a tree through the factory shares unchanged subtrees with the
//! old tree. Binding the new root re-points those shared nodes at their new
//! parents, so after every bind the parents describe the most recently bound
//! tree. Slots sit behind a lock, so reads from other threads never observe a
//! torn value.

use tracing::{debug, warn};

use crate::visitor::for_each_child_recursive;
use crate::{Factory, Id, Machine, MachineConfig, MachineFile, Node};

/// A node kind that can have a parent.
///
/// `Parent` is the only kind that can contain `Self`. [`MachineFile`] does
/// not implement this trait because it is always a root.
pub trait HasParent<'a> {
    type Parent: 'a;

    /// Returns the bound parent, if any.
    fn parent(&self) -> Option<&'a Self::Parent>;

    /// Points this node at `parent` and returns the parent it had before.
    fn set_parent(&self, parent: &'a Self::Parent) -> Option<&'a Self::Parent>;
}

macro_rules! impl_has_parent {
    ($($node:ident => $parent:ident),* $(,)?) => {
        $(
            impl<'a> HasParent<'a> for $node<'a> {
                type Parent = $parent<'a>;

                #[inline]
                fn parent(&self) -> Option<&'a $parent<'a>> {
                    *self.parent.read()
                }

                #[inline]
                fn set_parent(&self, parent: &'a $parent<'a>) -> Option<&'a $parent<'a>> {
                    self.parent.write().replace(parent)
                }
            }
        )*
    };
}

impl_has_parent!(
    Id => MachineConfig,
    MachineConfig => Machine,
    Machine => MachineFile,
);

/// Outcome of binding a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Binding {
    /// The node had no parent yet.
    Bound,
    /// The node already pointed at this parent.
    Unchanged,
    /// The node pointed at another parent, typically in an older tree.
    Rebound,
    /// `parent` is not a kind that can contain the node.
    KindMismatch,
}

impl Binding {
    fn from_previous<P>(previous: Option<&P>, parent: &P) -> Self {
        match previous {
            None => Binding::Bound,
            Some(previous) if std::ptr::eq(previous, parent) => Binding::Unchanged,
            Some(_) => Binding::Rebound,
        }
    }
}

impl<'a> Node<'a> {
    /// Points this node at `parent` if `parent` is a kind that can contain it.
    pub(crate) fn bind_parent(self, parent: Node<'a>) -> Binding {
        match (self, parent) {
            (Node::Id(node), Node::MachineConfig(parent)) => {
                Binding::from_previous(node.set_parent(parent), parent)
            }
            (Node::MachineConfig(node), Node::Machine(parent)) => {
                Binding::from_previous(node.set_parent(parent), parent)
            }
            (Node::Machine(node), Node::MachineFile(parent)) => {
                Binding::from_previous(node.set_parent(parent), parent)
            }
            _ => Binding::KindMismatch,
        }
    }
}

/// Binds the parent of every descendant of `root` and returns `root`.
///
/// Running it again on the same tree changes nothing. Nodes shared with a
/// previously bound tree are re-pointed into this one.
///
/// # Example
///
/// ```rust
/// use statetree_ast::{AstArena, Factory, HasParent, bind_parents};
///
/// let arena = AstArena::new();
/// let factory = Factory::new(&arena);
/// let id = factory.create_id("toggle");
/// let file = bind_parents(factory.create_machine_file(&[
///     factory.create_machine(factory.create_machine_config(Some(id))),
/// ]));
///
/// let config = id.parent().unwrap();
/// let machine = config.parent().unwrap();
/// assert!(std::ptr::eq(machine.parent().unwrap(), file));
/// ```
pub fn bind_parents<'a, N>(root: N) -> N
where
    N: Into<Node<'a>> + Copy,
{
    let root_node: Node<'a> = root.into();
    let (mut bound, mut rebound, mut unchanged) = (0usize, 0usize, 0usize);

    for_each_child_recursive::<()>(root_node, |node, parent| {
        match node.bind_parent(parent) {
            Binding::Bound => bound += 1,
            Binding::Rebound => rebound += 1,
            Binding::Unchanged => unchanged += 1,
            Binding::KindMismatch => warn!(
                kind = %node.kind(),
                parent = %parent.kind(),
                "Child enumeration yielded a node its parent kind cannot contain"
            ),
        }
        None
    });

    debug!(
        root = %root_node.kind(),
        bound,
        rebound,
        unchanged,
        "Bound parents"
    );
    root
}

/// Creates a `MachineFile` and binds the parents of the whole tree.
pub fn create_machine_file<'a>(
    factory: &Factory<'a>,
    machines: &[&'a Machine<'a>],
) -> &'a MachineFile<'a> {
    bind_parents(factory.create_machine_file(machines))
}
