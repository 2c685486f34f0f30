//! Node kind predicates.

use crate::{Id, Machine, MachineConfig, MachineFile, Node};

#[inline]
pub fn is_id(node: Node<'_>) -> bool {
    matches!(node, Node::Id(_))
}

#[inline]
pub fn is_machine_config(node: Node<'_>) -> bool {
    matches!(node, Node::MachineConfig(_))
}

#[inline]
pub fn is_machine(node: Node<'_>) -> bool {
    matches!(node, Node::Machine(_))
}

#[inline]
pub fn is_machine_file(node: Node<'_>) -> bool {
    matches!(node, Node::MachineFile(_))
}

impl<'a> Node<'a> {
    /// Returns the `Id` this handle points at, if it is one.
    #[inline]
    pub fn as_id(self) -> Option<&'a Id<'a>> {
        match self {
            Node::Id(node) => Some(node),
            _ => None,
        }
    }

    #[inline]
    pub fn as_machine_config(self) -> Option<&'a MachineConfig<'a>> {
        match self {
            Node::MachineConfig(node) => Some(node),
            _ => None,
        }
    }

    #[inline]
    pub fn as_machine(self) -> Option<&'a Machine<'a>> {
        match self {
            Node::Machine(node) => Some(node),
            _ => None,
        }
    }

    #[inline]
    pub fn as_machine_file(self) -> Option<&'a MachineFile<'a>> {
        match self {
            Node::MachineFile(node) => Some(node),
            _ => None,
        }
    }
}
