//! Node definitions.
//!
//! Each concrete node shape is its own struct, allocated in an [`AstArena`]
//! and referenced through `&'a` borrows. [`Node`] is the kind-tagged handle
//! that generic code passes around; [`NodeArray`] is the handle for a child
//! array and [`Child`] is either of the two.
//!
//! All fields are fixed at construction except the parent back-reference,
//! a lock-guarded slot filled in by the parent binder (see
//! [`crate::bind_parents`]).
//!
//! [`AstArena`]: crate::AstArena

use std::fmt;
use parking_lot::RwLock;

use crate::{NodeKind, Span};

/// The id of a machine.
///
/// # Example
///
/// ```rust
/// use statetree_ast::{AstArena, HasParent, Id, Span};
///
/// let arena = AstArena::new();
/// let id = arena.alloc(Id::new(Span::new(59, 61), arena.alloc_str("toggle")));
/// assert_eq!(id.value, "toggle");
/// assert!(id.parent().is_none());
/// ```
pub struct Id<'a> {
    /// Byte span in the source text.
    pub span: Span,
    /// The text value of the id.
    pub value: &'a str,
    pub(crate) parent: RwLock<Option<&'a MachineConfig<'a>>>,
}

/// A machine's config object.
pub struct MachineConfig<'a> {
    /// Byte span in the source text.
    pub span: Span,
    /// The machine's id node, if the config declares one.
    pub id: Option<&'a Id<'a>>,
    pub(crate) parent: RwLock<Option<&'a Machine<'a>>>,
}

/// A machine definition (`createMachine` call).
pub struct Machine<'a> {
    /// Byte span in the source text.
    pub span: Span,
    /// The machine's config node.
    pub config: &'a MachineConfig<'a>,
    pub(crate) parent: RwLock<Option<&'a MachineFile<'a>>>,
}

/// A source file which may contain machines.
///
/// Always the root of a tree, so it has no parent slot at all.
pub struct MachineFile<'a> {
    /// Byte span in the source text.
    pub span: Span,
    /// The machines contained in this file, in source order.
    pub machines: &'a [&'a Machine<'a>],
}

impl<'a> Id<'a> {
    /// Creates an unbound `Id` node.
    #[inline]
    pub fn new(span: Span, value: &'a str) -> Self {
        Self {
            span,
            value,
            parent: RwLock::new(None),
        }
    }

    #[inline]
    pub const fn kind(&self) -> NodeKind {
        NodeKind::Id
    }
}

impl<'a> MachineConfig<'a> {
    /// Creates an unbound `MachineConfig` node.
    #[inline]
    pub fn new(span: Span, id: Option<&'a Id<'a>>) -> Self {
        Self {
            span,
            id,
            parent: RwLock::new(None),
        }
    }

    #[inline]
    pub const fn kind(&self) -> NodeKind {
        NodeKind::MachineConfig
    }
}

impl<'a> Machine<'a> {
    /// Creates an unbound `Machine` node.
    #[inline]
    pub fn new(span: Span, config: &'a MachineConfig<'a>) -> Self {
        Self {
            span,
            config,
            parent: RwLock::new(None),
        }
    }

    #[inline]
    pub const fn kind(&self) -> NodeKind {
        NodeKind::Machine
    }
}

impl<'a> MachineFile<'a> {
    /// Creates a `MachineFile` node.
    #[inline]
    pub const fn new(span: Span, machines: &'a [&'a Machine<'a>]) -> Self {
        Self { span, machines }
    }

    #[inline]
    pub const fn kind(&self) -> NodeKind {
        NodeKind::MachineFile
    }
}

// Structural equality over span and fields. The parent slot is not compared.

impl PartialEq for Id<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.span == other.span && self.value == other.value
    }
}

impl PartialEq for MachineConfig<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.span == other.span && self.id == other.id
    }
}

impl PartialEq for Machine<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.span == other.span && self.config == other.config
    }
}

impl PartialEq for MachineFile<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.span == other.span && self.machines == other.machines
    }
}

impl Eq for Id<'_> {}
impl Eq for MachineConfig<'_> {}
impl Eq for Machine<'_> {}
impl Eq for MachineFile<'_> {}

// Debug skips the parent slot: printing it would walk back down the tree.

impl fmt::Debug for Id<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Id")
            .field("span", &self.span)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for MachineConfig<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MachineConfig")
            .field("span", &self.span)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for Machine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("span", &self.span)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for MachineFile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MachineFile")
            .field("span", &self.span)
            .field("machines", &self.machines)
            .finish()
    }
}

/// A reference to any node in the tree, tagged by kind.
///
/// `Node` is `Copy`; cloning it copies the reference, never the node.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Id(&'a Id<'a>),
    MachineConfig(&'a MachineConfig<'a>),
    Machine(&'a Machine<'a>),
    MachineFile(&'a MachineFile<'a>),
}

impl<'a> Node<'a> {
    /// Returns the kind of the referenced node.
    #[inline]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Node::Id(_) => NodeKind::Id,
            Node::MachineConfig(_) => NodeKind::MachineConfig,
            Node::Machine(_) => NodeKind::Machine,
            Node::MachineFile(_) => NodeKind::MachineFile,
        }
    }

    /// Returns the span of the referenced node.
    #[inline]
    pub const fn span(&self) -> Span {
        match self {
            Node::Id(node) => node.span,
            Node::MachineConfig(node) => node.span,
            Node::Machine(node) => node.span,
            Node::MachineFile(node) => node.span,
        }
    }

    /// Returns the structural parent, if one has been bound.
    ///
    /// Always `None` for a `MachineFile`.
    pub fn parent(&self) -> Option<Node<'a>> {
        match self {
            Node::Id(node) => (*node.parent.read()).map(Node::MachineConfig),
            Node::MachineConfig(node) => (*node.parent.read()).map(Node::Machine),
            Node::Machine(node) => (*node.parent.read()).map(Node::MachineFile),
            Node::MachineFile(_) => None,
        }
    }

    /// Returns true if both handles point at the same node instance.
    pub fn ptr_eq(&self, other: &Node<'a>) -> bool {
        match (self, other) {
            (Node::Id(a), Node::Id(b)) => std::ptr::eq(*a, *b),
            (Node::MachineConfig(a), Node::MachineConfig(b)) => std::ptr::eq(*a, *b),
            (Node::Machine(a), Node::Machine(b)) => std::ptr::eq(*a, *b),
            (Node::MachineFile(a), Node::MachineFile(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl<'a> From<&'a Id<'a>> for Node<'a> {
    fn from(node: &'a Id<'a>) -> Self {
        Node::Id(node)
    }
}

impl<'a> From<&'a MachineConfig<'a>> for Node<'a> {
    fn from(node: &'a MachineConfig<'a>) -> Self {
        Node::MachineConfig(node)
    }
}

impl<'a> From<&'a Machine<'a>> for Node<'a> {
    fn from(node: &'a Machine<'a>) -> Self {
        Node::Machine(node)
    }
}

impl<'a> From<&'a MachineFile<'a>> for Node<'a> {
    fn from(node: &'a MachineFile<'a>) -> Self {
        Node::MachineFile(node)
    }
}

/// A reference to a child array of some node.
#[derive(Debug, Clone, Copy)]
pub enum NodeArray<'a> {
    /// `MachineFile::machines`.
    Machines(&'a [&'a Machine<'a>]),
}

impl<'a> NodeArray<'a> {
    /// Returns the number of nodes in the array.
    #[inline]
    pub const fn len(&self) -> usize {
        match self {
            NodeArray::Machines(machines) => machines.len(),
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the kind shared by every element of the array.
    #[inline]
    pub const fn element_kind(&self) -> NodeKind {
        match self {
            NodeArray::Machines(_) => NodeKind::Machine,
        }
    }

    /// Returns the element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Node<'a>> {
        match self {
            NodeArray::Machines(machines) => machines.get(index).copied().map(Node::Machine),
        }
    }

    /// Iterates over the elements in array order.
    pub fn iter(self) -> impl DoubleEndedIterator<Item = Node<'a>> + ExactSizeIterator {
        match self {
            NodeArray::Machines(machines) => machines.iter().copied().map(Node::Machine),
        }
    }

    /// Returns true if both handles refer to the same backing slice.
    pub fn ptr_eq(&self, other: &NodeArray<'a>) -> bool {
        match (self, other) {
            (NodeArray::Machines(a), NodeArray::Machines(b)) => std::ptr::eq(*a, *b),
        }
    }
}

/// A single child slot of a node: either one node or a child array.
#[derive(Debug, Clone, Copy)]
pub enum Child<'a> {
    Node(Node<'a>),
    Array(NodeArray<'a>),
}

impl<'a> Child<'a> {
    /// Returns true if both children refer to the same node or array.
    pub fn ptr_eq(&self, other: &Child<'a>) -> bool {
        match (self, other) {
            (Child::Node(a), Child::Node(b)) => a.ptr_eq(b),
            (Child::Array(a), Child::Array(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}
