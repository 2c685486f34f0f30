//! Traversal functions.
//!
//! Both levels of traversal are built only on [`enumerate_children`], so
//! they work for any node kind the dispatch table knows about.
//!
//! Callbacks return `Option<T>`. The first `Some` stops the traversal and is
//! returned; `None` means "keep going".

use crate::{Child, Node, NodeArray};

use super::children::{collect_children, enumerate_children};

/// Callback receiving a descendant node and its structural parent.
pub type NodeWithParentCallback<'f, 'a, T> = dyn FnMut(Node<'a>, Node<'a>) -> Option<T> + 'f;

/// Callback receiving a descendant child array and the node that owns it.
pub type ArrayWithParentCallback<'f, 'a, T> =
    dyn FnMut(NodeArray<'a>, Node<'a>) -> Option<T> + 'f;

/// Calls `on_node` for each immediate child of `node`.
///
/// Child arrays are flattened: `on_node` is called once per element, in
/// order. Iteration stops at the first callback that returns `Some`, and that
/// value is returned.
///
/// # Example
///
/// ```rust
/// use statetree_ast::{AstArena, Factory, Node, for_each_child};
///
/// let arena = AstArena::new();
/// let factory = Factory::new(&arena);
/// let file = factory.create_machine_file(&[
///     factory.create_machine(factory.create_machine_config(None)),
///     factory.create_machine(factory.create_machine_config(Some(factory.create_id("id-1")))),
///     factory.create_machine(factory.create_machine_config(Some(factory.create_id("id-2")))),
/// ]);
///
/// let first_id = for_each_child(Node::from(file), |node| {
///     node.as_machine()?.config.id.map(|id| id.value)
/// });
/// assert_eq!(first_id, Some("id-1"));
/// ```
pub fn for_each_child<'a, T>(
    node: impl Into<Option<Node<'a>>>,
    mut on_node: impl FnMut(Node<'a>) -> Option<T>,
) -> Option<T> {
    enumerate_children(node.into(), &mut on_node, None)
}

/// Like [`for_each_child`], but child arrays are passed whole to `on_array`
/// instead of being flattened into `on_node` calls.
pub fn for_each_child_with_arrays<'a, T>(
    node: impl Into<Option<Node<'a>>>,
    mut on_node: impl FnMut(Node<'a>) -> Option<T>,
    mut on_array: impl FnMut(NodeArray<'a>) -> Option<T>,
) -> Option<T> {
    enumerate_children(node.into(), &mut on_node, Some(&mut on_array))
}

/// Calls `on_node` for every descendant of `root`, pre-order, left to right,
/// together with the descendant's parent.
///
/// `root` itself is not visited. Stops at the first callback that returns
/// `Some` and returns that value.
///
/// The traversal keeps its own work stack, so tree depth is not limited by
/// the call stack.
///
/// # Example
///
/// ```rust
/// use statetree_ast::{AstArena, Factory, Node, for_each_child_recursive};
///
/// let arena = AstArena::new();
/// let factory = Factory::new(&arena);
/// let file = factory.create_machine_file(&[
///     factory.create_machine(factory.create_machine_config(Some(factory.create_id("id-1")))),
///     factory.create_machine(factory.create_machine_config(None)),
/// ]);
///
/// let mut kinds = Vec::new();
/// for_each_child_recursive::<()>(Node::from(file), |node, parent| {
///     kinds.push(format!("{} in {}", node.kind(), parent.kind()));
///     None
/// });
/// assert_eq!(
///     kinds,
///     [
///         "Machine in MachineFile",
///         "MachineConfig in Machine",
///         "Id in MachineConfig",
///         "Machine in MachineFile",
///         "MachineConfig in Machine",
///     ]
/// );
/// ```
pub fn for_each_child_recursive<'a, T>(
    root: Node<'a>,
    mut on_node: impl FnMut(Node<'a>, Node<'a>) -> Option<T>,
) -> Option<T> {
    walk(root, &mut on_node, None)
}

/// Like [`for_each_child_recursive`], but every descendant child array is
/// first passed to `on_array` with its owner. The array's elements are then
/// visited as usual, unless `on_array` returned `Some`.
pub fn for_each_child_recursive_with_arrays<'a, T>(
    root: Node<'a>,
    mut on_node: impl FnMut(Node<'a>, Node<'a>) -> Option<T>,
    mut on_array: impl FnMut(NodeArray<'a>, Node<'a>) -> Option<T>,
) -> Option<T> {
    walk(root, &mut on_node, Some(&mut on_array))
}

fn walk<'a, T>(
    root: Node<'a>,
    on_node: &mut NodeWithParentCallback<'_, 'a, T>,
    mut on_array: Option<&mut ArrayWithParentCallback<'_, 'a, T>>,
) -> Option<T> {
    // Pending items paired with the parent to report for them. Children are
    // pushed in reverse so that popping yields declaration order.
    let mut stack: Vec<(Child<'a>, Node<'a>)> = Vec::new();
    let mut scratch: Vec<Child<'a>> = Vec::new();

    push_children(&mut stack, &mut scratch, root);

    while let Some((item, parent)) = stack.pop() {
        match item {
            Child::Array(array) => {
                if let Some(on_array) = on_array.as_deref_mut() {
                    if let Some(result) = on_array(array, parent) {
                        return Some(result);
                    }
                }
                stack.extend(array.iter().rev().map(|node| (Child::Node(node), parent)));
            }
            Child::Node(node) => {
                if let Some(result) = on_node(node, parent) {
                    return Some(result);
                }
                push_children(&mut stack, &mut scratch, node);
            }
        }
    }

    None
}

fn push_children<'a>(
    stack: &mut Vec<(Child<'a>, Node<'a>)>,
    scratch: &mut Vec<Child<'a>>,
    parent: Node<'a>,
) {
    collect_children(parent, scratch);
    stack.extend(scratch.drain(..).rev().map(|child| (child, parent)));
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{AstArena, Factory, MachineFile};

    fn two_machines<'a>(factory: &Factory<'a>) -> &'a MachineFile<'a> {
        factory.create_machine_file(&[
            factory.create_machine(factory.create_machine_config(Some(factory.create_id("id")))),
            factory.create_machine(factory.create_machine_config(None)),
        ])
    }

    #[test]
    fn test_for_each_child_on_leaf_calls_nothing() {
        let arena = AstArena::new();
        let factory = Factory::new(&arena);
        let id = factory.create_id("id");

        let calls = Cell::new(0);
        let result = for_each_child_with_arrays::<()>(
            Node::from(id),
            |_| {
                calls.set(calls.get() + 1);
                None
            },
            |_| {
                calls.set(calls.get() + 1);
                None
            },
        );

        assert!(result.is_none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_for_each_child_accepts_absent_node() {
        let result = for_each_child(None::<Node<'_>>, |_| Some(1));
        assert!(result.is_none());
    }

    #[test]
    fn test_for_each_child_visits_machine_config() {
        let arena = AstArena::new();
        let factory = Factory::new(&arena);
        let config = factory.create_machine_config(None);
        let machine = factory.create_machine(config);

        let mut visited = Vec::new();
        for_each_child::<()>(Node::from(machine), |node| {
            visited.push(node);
            None
        });

        assert_eq!(visited.len(), 1);
        assert!(visited[0].ptr_eq(&Node::from(config)));
    }

    #[test]
    fn test_for_each_child_visits_present_id_only() {
        let arena = AstArena::new();
        let factory = Factory::new(&arena);
        let id = factory.create_id("id");

        let mut visited = Vec::new();
        for_each_child::<()>(Node::from(factory.create_machine_config(Some(id))), |node| {
            visited.push(node);
            None
        });
        assert_eq!(visited.len(), 1);
        assert!(visited[0].ptr_eq(&Node::from(id)));

        let empty = factory.create_machine_config(None);
        assert!(for_each_child(Node::from(empty), |_| Some(())).is_none());
    }

    #[test]
    fn test_for_each_child_returns_node_callback_result() {
        let arena = AstArena::new();
        let factory = Factory::new(&arena);
        let machine = factory.create_machine(factory.create_machine_config(None));

        assert_eq!(for_each_child(Node::from(machine), |_| Some("foo")), Some("foo"));
    }

    #[test]
    fn test_for_each_child_passes_whole_array_when_array_callback_given() {
        let arena = AstArena::new();
        let factory = Factory::new(&arena);
        let file = two_machines(&factory);

        let mut nodes = 0;
        let mut arrays = Vec::new();
        for_each_child_with_arrays::<()>(
            Node::from(file),
            |_| {
                nodes += 1;
                None
            },
            |array| {
                arrays.push(array);
                None
            },
        );

        assert_eq!(nodes, 0);
        assert_eq!(arrays.len(), 1);
        assert!(arrays[0].ptr_eq(&NodeArray::Machines(file.machines)));
    }

    #[test]
    fn test_for_each_child_flattens_array_without_array_callback() {
        let arena = AstArena::new();
        let factory = Factory::new(&arena);
        let file = two_machines(&factory);

        let mut visited = Vec::new();
        for_each_child::<()>(Node::from(file), |node| {
            visited.push(node);
            None
        });

        assert_eq!(visited.len(), 2);
        assert!(visited[0].ptr_eq(&Node::from(file.machines[0])));
        assert!(visited[1].ptr_eq(&Node::from(file.machines[1])));
    }

    #[test]
    fn test_for_each_child_returns_array_callback_result() {
        let arena = AstArena::new();
        let factory = Factory::new(&arena);
        let file = two_machines(&factory);

        let result = for_each_child_with_arrays(Node::from(file), |_| None, |_| Some("foo"));
        assert_eq!(result, Some("foo"));
    }

    #[test]
    fn test_for_each_child_stops_flattened_array_at_first_result() {
        let arena = AstArena::new();
        let factory = Factory::new(&arena);
        let file = two_machines(&factory);

        let mut calls = 0;
        let result = for_each_child(Node::from(file), |_| {
            calls += 1;
            Some("foo")
        });

        assert_eq!(result, Some("foo"));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_for_each_child_does_not_treat_falsy_values_as_absent() {
        let arena = AstArena::new();
        let factory = Factory::new(&arena);
        let file = two_machines(&factory);

        let mut calls = 0;
        let result = for_each_child(Node::from(file), |_| {
            calls += 1;
            Some(0)
        });

        assert_eq!(result, Some(0));
        assert_eq!(calls, 1);
    }

    #[derive(Debug, Clone, Copy)]
    enum Event<'a> {
        Node(Node<'a>, Node<'a>),
        Array(NodeArray<'a>, Node<'a>),
    }

    impl<'a> Event<'a> {
        fn same(&self, other: &Event<'a>) -> bool {
            match (self, other) {
                (Event::Node(a, pa), Event::Node(b, pb)) => a.ptr_eq(b) && pa.ptr_eq(pb),
                (Event::Array(a, pa), Event::Array(b, pb)) => a.ptr_eq(b) && pa.ptr_eq(pb),
                _ => false,
            }
        }
    }

    fn assert_events<'a>(actual: &[Event<'a>], expected: &[Event<'a>]) {
        assert_eq!(actual.len(), expected.len(), "events: {:?}", actual);
        for (index, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!(a.same(e), "event {} was {:?}, expected {:?}", index, a, e);
        }
    }

    #[test]
    fn test_for_each_child_recursive_visits_all_descendants_with_parents() {
        let arena = AstArena::new();
        let factory = Factory::new(&arena);
        let file = factory.create_machine_file(&[
            factory.create_machine(factory.create_machine_config(Some(factory.create_id("id-1")))),
            factory.create_machine(factory.create_machine_config(Some(factory.create_id("id-2")))),
        ]);

        let events = RefCell::new(Vec::new());
        let result = for_each_child_recursive_with_arrays::<()>(
            Node::from(file),
            |node, parent| {
                events.borrow_mut().push(Event::Node(node, parent));
                None
            },
            |array, parent| {
                events.borrow_mut().push(Event::Array(array, parent));
                None
            },
        );

        let [first, second] = [file.machines[0], file.machines[1]];
        assert!(result.is_none());
        assert_events(
            &events.borrow(),
            &[
                Event::Array(NodeArray::Machines(file.machines), Node::from(file)),
                Event::Node(Node::from(first), Node::from(file)),
                Event::Node(Node::from(first.config), Node::from(first)),
                Event::Node(Node::from(first.config.id.unwrap()), Node::from(first.config)),
                Event::Node(Node::from(second), Node::from(file)),
                Event::Node(Node::from(second.config), Node::from(second)),
                Event::Node(Node::from(second.config.id.unwrap()), Node::from(second.config)),
            ],
        );
    }

    #[test]
    fn test_for_each_child_recursive_stops_at_first_node_result() {
        let arena = AstArena::new();
        let factory = Factory::new(&arena);
        let file = two_machines(&factory);

        let mut events = Vec::new();
        let result = for_each_child_recursive(Node::from(file), |node, parent| {
            events.push(Event::Node(node, parent));
            node.as_id().map(|id| id.value)
        });

        let first = file.machines[0];
        assert_eq!(result, Some("id"));
        assert_events(
            &events,
            &[
                Event::Node(Node::from(first), Node::from(file)),
                Event::Node(Node::from(first.config), Node::from(first)),
                Event::Node(Node::from(first.config.id.unwrap()), Node::from(first.config)),
            ],
        );
    }

    #[test]
    fn test_for_each_child_recursive_stops_at_first_array_result() {
        let arena = AstArena::new();
        let factory = Factory::new(&arena);
        let file = factory.create_machine_file(&[
            factory.create_machine(factory.create_machine_config(None)),
            factory.create_machine(factory.create_machine_config(None)),
        ]);

        let mut node_calls = 0;
        let mut arrays = Vec::new();
        let result = for_each_child_recursive_with_arrays(
            Node::from(file),
            |_, _| {
                node_calls += 1;
                None
            },
            |array, parent| {
                arrays.push(Event::Array(array, parent));
                Some(array.len())
            },
        );

        assert_eq!(result, Some(2));
        assert_eq!(node_calls, 0);
        assert_events(
            &arrays,
            &[Event::Array(NodeArray::Machines(file.machines), Node::from(file))],
        );
    }

    #[test]
    fn test_for_each_child_recursive_from_inner_node() {
        let arena = AstArena::new();
        let factory = Factory::new(&arena);
        let file = two_machines(&factory);
        let machine = file.machines[0];

        let mut events = Vec::new();
        for_each_child_recursive::<()>(Node::from(machine), |node, parent| {
            events.push(Event::Node(node, parent));
            None
        });

        assert_events(
            &events,
            &[
                Event::Node(Node::from(machine.config), Node::from(machine)),
                Event::Node(Node::from(machine.config.id.unwrap()), Node::from(machine.config)),
            ],
        );
    }

    #[test]
    fn test_for_each_child_recursive_handles_wide_trees() {
        let arena = AstArena::new();
        let factory = Factory::new(&arena);
        let machines: Vec<_> = (0..50_000)
            .map(|i| {
                let id = factory.create_id(&format!("machine-{}", i));
                factory.create_machine(factory.create_machine_config(Some(id)))
            })
            .collect();
        let file = factory.create_machine_file(&machines);

        let mut last = None;
        let mut count = 0usize;
        for_each_child_recursive::<()>(Node::from(file), |node, _| {
            count += 1;
            if let Some(id) = node.as_id() {
                last = Some(id.value);
            }
            None
        });

        assert_eq!(count, 150_000);
        assert_eq!(last, Some("machine-49999"));
    }
}
