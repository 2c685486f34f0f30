//! Child enumeration and tree traversal.
//!
//! # Overview
//!
//! - [`enumerate_children`] - the per-kind dispatch table everything else uses
//! - [`for_each_child`] - visit the immediate children of a node
//! - [`for_each_child_recursive`] - visit every descendant, pre-order, with
//!   each descendant's parent
//!
//! Every function has a `_with_arrays` variant that also reports child arrays
//! as a unit.
//!
//! # Early Termination
//!
//! Callbacks return `Option<T>`. Returning `Some` stops the traversal
//! immediately and the value becomes the traversal's result.
//!
//! ```rust
//! use statetree_ast::{AstArena, Factory, Node};
//! use statetree_ast::visitor::for_each_child_recursive;
//!
//! let arena = AstArena::new();
//! let factory = Factory::new(&arena);
//! let file = factory.create_machine_file(&[
//!     factory.create_machine(factory.create_machine_config(None)),
//!     factory.create_machine(factory.create_machine_config(Some(factory.create_id("light")))),
//! ]);
//!
//! let mut visited = 0;
//! let found = for_each_child_recursive(Node::from(file), |node, _parent| {
//!     visited += 1;
//!     node.as_id().map(|id| id.value)
//! });
//!
//! assert_eq!(found, Some("light"));
//! assert_eq!(visited, 5);
//! ```

mod children;
mod walk;

pub use children::{ArrayCallback, NodeCallback, enumerate_children};
pub use walk::{
    ArrayWithParentCallback, NodeWithParentCallback, for_each_child, for_each_child_recursive,
    for_each_child_recursive_with_arrays, for_each_child_with_arrays,
};
