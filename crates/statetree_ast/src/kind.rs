//! Node kind discriminants.

use serde::{Deserialize, Serialize};

/// Unique identifier for each concrete node shape.
///
/// Every per-kind behavior (child enumeration, parent pairing, predicates)
/// is selected by matching on the kind rather than through trait objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum NodeKind {
    /// The id of a machine.
    Id,
    /// A machine's config object.
    MachineConfig,
    /// A machine definition (`createMachine` call).
    Machine,
    /// Root node: a source file which may contain machines.
    MachineFile,
}

impl NodeKind {
    /// Returns true if nodes of this kind can have child nodes.
    #[inline]
    pub const fn has_children(&self) -> bool {
        matches!(
            self,
            NodeKind::MachineConfig | NodeKind::Machine | NodeKind::MachineFile
        )
    }

    /// Returns true if this kind is always the root of a tree.
    #[inline]
    pub const fn is_root(&self) -> bool {
        matches!(self, NodeKind::MachineFile)
    }

    /// Returns the kind's name, matching its serialized form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Id => "Id",
            NodeKind::MachineConfig => "MachineConfig",
            NodeKind::Machine => "Machine",
            NodeKind::MachineFile => "MachineFile",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
