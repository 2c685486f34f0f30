//! # statetree_ast
//!
//! Syntax tree definitions for StateTree machine files.
//!
//! A tree describes a source file that may define state machines:
//! a [`MachineFile`] holds [`Machine`]s, each machine has a
//! [`MachineConfig`], and a config may carry an [`Id`].
//!
//! ## Architecture
//!
//! - Uses `bumpalo` for Arena allocation; every node of a tree lives in one
//!   [`AstArena`] and is referenced through `&'a` borrows
//! - Nodes are immutable once built. Edits go through [`Factory`]'s
//!   `update_*` methods, which return the existing node when nothing changed
//! - Parent back-references are filled in (and re-pointed) by
//!   [`bind_parents`] after the tree is complete
//! - Traversal is generic over node kinds: everything is built on one
//!   per-kind child table ([`visitor::enumerate_children`])
//!
//! ## Example
//!
//! ```rust
//! use statetree_ast::{AstArena, Factory, HasParent, Node, create_machine_file,
//!     for_each_child_recursive, is_id};
//!
//! let arena = AstArena::new();
//! let factory = Factory::new(&arena);
//!
//! let id = factory.create_id("traffic-light");
//! let machine = factory.create_machine(factory.create_machine_config(Some(id)));
//! let file = create_machine_file(&factory, &[machine]);
//!
//! assert!(std::ptr::eq(machine.parent().unwrap(), file));
//!
//! let ids = {
//!     let mut count = 0;
//!     for_each_child_recursive::<()>(Node::from(file), |node, _| {
//!         if is_id(node) {
//!             count += 1;
//!         }
//!         None
//!     });
//!     count
//! };
//! assert_eq!(ids, 1);
//! ```

mod arena;
mod config;
mod error;
mod factory;
mod kind;
mod node;
mod parent;
mod predicates;
mod span;
pub mod visitor;

pub use arena::AstArena;
pub use config::{ShortCircuit, Traversal, TraversalConfig, Truthy};
pub use error::ConfigError;
pub use factory::Factory;
pub use kind::NodeKind;
pub use node::{Child, Id, Machine, MachineConfig, MachineFile, Node, NodeArray};
pub use parent::{HasParent, bind_parents, create_machine_file};
pub use predicates::{is_id, is_machine, is_machine_config, is_machine_file};
pub use span::Span;

// Re-export the traversal functions for convenience
pub use visitor::{
    enumerate_children, for_each_child, for_each_child_recursive,
    for_each_child_recursive_with_arrays, for_each_child_with_arrays,
};
