//! Traversal configuration.
//!
//! The free traversal functions in [`crate::visitor`] stop at the first
//! callback result that is present (`Some`). [`Traversal`] runs the same
//! functions under a [`TraversalConfig`], which can instead stop only at
//! results that are *truthy* in the JavaScript sense, so `Some(0)`,
//! `Some("")` and `Some(false)` let traversal continue.

use serde::{Deserialize, Serialize};

use crate::visitor::{
    for_each_child, for_each_child_recursive, for_each_child_recursive_with_arrays,
    for_each_child_with_arrays,
};
use crate::{ConfigError, Node, NodeArray};

/// When a callback result stops a traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShortCircuit {
    /// Any `Some` stops the traversal.
    #[default]
    Present,
    /// Only a `Some` holding a [`Truthy`] value stops the traversal.
    Truthy,
}

impl ShortCircuit {
    /// Returns `result` if it should stop the traversal, `None` otherwise.
    #[inline]
    pub fn keep<T: Truthy>(self, result: Option<T>) -> Option<T> {
        match self {
            ShortCircuit::Present => result,
            ShortCircuit::Truthy => result.filter(Truthy::is_truthy),
        }
    }
}

/// JavaScript-style truthiness of a callback result.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

macro_rules! impl_truthy_for_int {
    ($($ty:ty),*) => {
        $(
            impl Truthy for $ty {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

// A char is a one-character string, never empty.
impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

// Arrays are objects, so even an empty one is truthy.

impl<T> Truthy for [T] {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for Node<'_> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for NodeArray<'_> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// Configuration for [`Traversal`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct TraversalConfig {
    /// Which callback results stop a traversal.
    pub short_circuit: ShortCircuit,
}

impl TraversalConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The traversal functions, run under a [`TraversalConfig`].
///
/// The mode is picked at runtime, so callback results must implement
/// [`Truthy`] even when the config says [`ShortCircuit::Present`]. A result
/// type of your own opts in with an `impl Truthy`; returning `true` there
/// makes every `Some` stop the walk in both modes. The free functions in
/// [`crate::visitor`] accept any result type and always behave as `Present`.
///
/// # Example
///
/// ```rust
/// use statetree_ast::{AstArena, Factory, Node, Traversal, TraversalConfig};
///
/// let arena = AstArena::new();
/// let factory = Factory::new(&arena);
/// let file = factory.create_machine_file(&[
///     factory.create_machine(factory.create_machine_config(Some(factory.create_id("")))),
///     factory.create_machine(factory.create_machine_config(Some(factory.create_id("door")))),
/// ]);
///
/// let config = TraversalConfig::from_json(r#"{ "shortCircuit": "truthy" }"#).unwrap();
/// let traversal = Traversal::new(config);
///
/// // the empty id is falsy and does not stop the walk
/// let id = traversal.for_each_child_recursive(Node::from(file), |node, _| {
///     node.as_id().map(|id| id.value)
/// });
/// assert_eq!(id, Some("door"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Traversal {
    config: TraversalConfig,
}

impl Traversal {
    pub fn new(config: TraversalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    /// See [`for_each_child`].
    pub fn for_each_child<'a, T: Truthy>(
        &self,
        node: impl Into<Option<Node<'a>>>,
        mut on_node: impl FnMut(Node<'a>) -> Option<T>,
    ) -> Option<T> {
        let mode = self.config.short_circuit;
        for_each_child(node, |child| mode.keep(on_node(child)))
    }

    /// See [`for_each_child_with_arrays`].
    pub fn for_each_child_with_arrays<'a, T: Truthy>(
        &self,
        node: impl Into<Option<Node<'a>>>,
        mut on_node: impl FnMut(Node<'a>) -> Option<T>,
        mut on_array: impl FnMut(NodeArray<'a>) -> Option<T>,
    ) -> Option<T> {
        let mode = self.config.short_circuit;
        for_each_child_with_arrays(
            node,
            |child| mode.keep(on_node(child)),
            |array| mode.keep(on_array(array)),
        )
    }

    /// See [`for_each_child_recursive`].
    pub fn for_each_child_recursive<'a, T: Truthy>(
        &self,
        root: Node<'a>,
        mut on_node: impl FnMut(Node<'a>, Node<'a>) -> Option<T>,
    ) -> Option<T> {
        let mode = self.config.short_circuit;
        for_each_child_recursive(root, |node, parent| mode.keep(on_node(node, parent)))
    }

    /// See [`for_each_child_recursive_with_arrays`].
    pub fn for_each_child_recursive_with_arrays<'a, T: Truthy>(
        &self,
        root: Node<'a>,
        mut on_node: impl FnMut(Node<'a>, Node<'a>) -> Option<T>,
        mut on_array: impl FnMut(NodeArray<'a>, Node<'a>) -> Option<T>,
    ) -> Option<T> {
        let mode = self.config.short_circuit;
        for_each_child_recursive_with_arrays(
            root,
            |node, parent| mode.keep(on_node(node, parent)),
            |array, parent| mode.keep(on_array(array, parent)),
        )
    }
}
