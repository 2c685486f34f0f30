//! # statetree_parser
//!
//! Parser abstraction layer for StateTree.
//!
//! This crate provides:
//! - A `Parser` trait for plugging in a source grammar
//! - `ParseError`, the error type parsers report
//! - `parse_machine_file`, which parses and then binds parents so the tree
//!   is ready for upward navigation
//!
//! ## Architecture
//!
//! Parsers turn source text into `statetree_ast` nodes, built through a
//! `Factory` with spans pointing into the source. No grammar ships with this
//! crate.
//!
//! ## Example
//!
//! ```rust,ignore
//! use statetree_ast::{AstArena, Factory};
//! use statetree_parser::parse_machine_file;
//!
//! let arena = AstArena::new();
//! let factory = Factory::new(&arena);
//! let file = parse_machine_file(&my_parser, &factory, source)?;
//! ```

mod error;
mod parse;
mod traits;

pub use error::ParseError;
pub use parse::parse_machine_file;
pub use traits::Parser;
