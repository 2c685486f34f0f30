//! Node factory.
//!
//! Creates nodes in an arena and performs identity-preserving updates: an
//! `update_*` call returns the existing node when nothing changed, so
//! rebuilding a tree after a local edit only allocates the path from the edit
//! up to the root. Unchanged subtrees are shared with the old tree.

use crate::{AstArena, Id, Machine, MachineConfig, MachineFile, Span};

/// Creates and updates nodes in a single arena.
///
/// # Example
///
/// ```rust
/// use statetree_ast::{AstArena, Factory};
///
/// let arena = AstArena::new();
/// let factory = Factory::new(&arena);
///
/// let id = factory.create_id("toggle");
/// let config = factory.create_machine_config(Some(id));
/// let machine = factory.create_machine(config);
/// let file = factory.create_machine_file(&[machine]);
///
/// // nothing changed, so the same node comes back
/// let same = factory.update_machine(machine, config);
/// assert!(std::ptr::eq(same, machine));
///
/// // a new id rebuilds only the nodes above it
/// let renamed = factory.update_id(id, "switch");
/// let config = factory.update_machine_config(config, Some(renamed));
/// let machine = factory.update_machine(machine, config);
/// let updated = factory.update_machine_file(file, &[machine]);
/// assert!(!std::ptr::eq(updated, file));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Factory<'a> {
    arena: &'a AstArena,
}

impl<'a> Factory<'a> {
    /// Creates a factory allocating into `arena`.
    pub fn new(arena: &'a AstArena) -> Self {
        Self { arena }
    }

    /// Returns the arena this factory allocates into.
    pub fn arena(&self) -> &'a AstArena {
        self.arena
    }

    /// Allocates a node built with its `new` constructor.
    ///
    /// This is the path for producers that carry real spans, such as parsers.
    #[inline]
    pub fn alloc<T>(&self, node: T) -> &'a T {
        self.arena.alloc(node)
    }

    /// Copies a string into the arena.
    #[inline]
    pub fn alloc_str(&self, value: &str) -> &'a str {
        self.arena.alloc_str(value)
    }

    /// Copies a machine list into the arena.
    #[inline]
    pub fn alloc_machines(&self, machines: &[&'a Machine<'a>]) -> &'a [&'a Machine<'a>] {
        self.arena.alloc_slice_copy(machines)
    }

    pub fn create_id(&self, value: &str) -> &'a Id<'a> {
        self.alloc(Id::new(Span::default(), self.alloc_str(value)))
    }

    /// Returns `node` if `value` is unchanged, otherwise a new `Id` with the
    /// same span.
    pub fn update_id(&self, node: &'a Id<'a>, value: &str) -> &'a Id<'a> {
        if node.value == value {
            node
        } else {
            self.alloc(Id::new(node.span, self.alloc_str(value)))
        }
    }

    pub fn create_machine_config(&self, id: Option<&'a Id<'a>>) -> &'a MachineConfig<'a> {
        self.alloc(MachineConfig::new(Span::default(), id))
    }

    /// Returns `node` if `id` is the same node (or both are absent).
    pub fn update_machine_config(
        &self,
        node: &'a MachineConfig<'a>,
        id: Option<&'a Id<'a>>,
    ) -> &'a MachineConfig<'a> {
        if same_optional(node.id, id) {
            node
        } else {
            self.alloc(MachineConfig::new(node.span, id))
        }
    }

    pub fn create_machine(&self, config: &'a MachineConfig<'a>) -> &'a Machine<'a> {
        self.alloc(Machine::new(Span::default(), config))
    }

    /// Returns `node` if `config` is the same node.
    pub fn update_machine(
        &self,
        node: &'a Machine<'a>,
        config: &'a MachineConfig<'a>,
    ) -> &'a Machine<'a> {
        if std::ptr::eq(node.config, config) {
            node
        } else {
            self.alloc(Machine::new(node.span, config))
        }
    }

    pub fn create_machine_file(&self, machines: &[&'a Machine<'a>]) -> &'a MachineFile<'a> {
        self.alloc(MachineFile::new(Span::default(), self.alloc_machines(machines)))
    }

    /// Returns `node` if `machines` holds exactly the same machine nodes, in
    /// the same order.
    pub fn update_machine_file(
        &self,
        node: &'a MachineFile<'a>,
        machines: &[&'a Machine<'a>],
    ) -> &'a MachineFile<'a> {
        let unchanged = node.machines.len() == machines.len()
            && node
                .machines
                .iter()
                .zip(machines)
                .all(|(old, new)| std::ptr::eq(*old, *new));

        if unchanged {
            node
        } else {
            self.alloc(MachineFile::new(node.span, self.alloc_machines(machines)))
        }
    }
}

fn same_optional<T>(a: Option<&T>, b: Option<&T>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => std::ptr::eq(a, b),
        (None, None) => true,
        _ => false,
    }
}
