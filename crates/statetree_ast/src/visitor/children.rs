//! Per-kind child enumeration.
//!
//! This is the only place that knows the shape of each node kind. Every
//! generic algorithm (single-level iteration, recursive traversal, parent
//! binding) is written against [`enumerate_children`] and never matches on a
//! concrete kind itself. Adding a kind means adding one arm to
//! [`children_of`].

use crate::{Child, Machine, MachineConfig, MachineFile, Node, NodeArray};

/// Callback receiving a single child node.
pub type NodeCallback<'f, 'a, T> = dyn FnMut(Node<'a>) -> Option<T> + 'f;

/// Callback receiving a child array.
pub type ArrayCallback<'f, 'a, T> = dyn FnMut(NodeArray<'a>) -> Option<T> + 'f;

/// Enumerates the immediate children of `node`.
///
/// - Single children are passed to `on_node`.
/// - Child arrays are passed to `on_array` when it is supplied. Otherwise
///   `on_node` is called for each element in order, stopping at the first
///   element that produces a result.
///
/// Returns the first `Some` produced by a callback, in child declaration
/// order, or `None` if `node` is absent, has no children, or no callback
/// produced a result.
pub fn enumerate_children<'a, T>(
    node: Option<Node<'a>>,
    on_node: &mut NodeCallback<'_, 'a, T>,
    mut on_array: Option<&mut ArrayCallback<'_, 'a, T>>,
) -> Option<T> {
    let node = node?;

    children_of(node, &mut |child| match child {
        Child::Node(child) => on_node(child),
        Child::Array(array) => match on_array.as_deref_mut() {
            Some(on_array) => on_array(array),
            None => array.iter().find_map(&mut *on_node),
        },
    })
}

/// The dispatch table: yields each child of `node` to `visit` in declaration
/// order and returns the first result.
fn children_of<'a, T>(
    node: Node<'a>,
    visit: &mut dyn FnMut(Child<'a>) -> Option<T>,
) -> Option<T> {
    match node {
        Node::Id(_) => None,
        Node::MachineConfig(node) => children_of_machine_config(node, visit),
        Node::Machine(node) => children_of_machine(node, visit),
        Node::MachineFile(node) => children_of_machine_file(node, visit),
    }
}

fn children_of_machine_config<'a, T>(
    node: &'a MachineConfig<'a>,
    visit: &mut dyn FnMut(Child<'a>) -> Option<T>,
) -> Option<T> {
    visit_node(visit, node.id.map(Node::Id))
}

fn children_of_machine<'a, T>(
    node: &'a Machine<'a>,
    visit: &mut dyn FnMut(Child<'a>) -> Option<T>,
) -> Option<T> {
    visit_node(visit, Some(Node::MachineConfig(node.config)))
}

fn children_of_machine_file<'a, T>(
    node: &'a MachineFile<'a>,
    visit: &mut dyn FnMut(Child<'a>) -> Option<T>,
) -> Option<T> {
    visit(Child::Array(NodeArray::Machines(node.machines)))
}

/// Visits an optional single child.
#[inline]
fn visit_node<'a, T>(
    visit: &mut dyn FnMut(Child<'a>) -> Option<T>,
    node: Option<Node<'a>>,
) -> Option<T> {
    node.and_then(|node| visit(Child::Node(node)))
}

/// Appends the immediate children of `node` to `out`, in declaration order,
/// keeping child arrays whole.
pub(super) fn collect_children<'a>(node: Node<'a>, out: &mut Vec<Child<'a>>) {
    children_of::<()>(node, &mut |child| {
        out.push(child);
        None
    });
}
