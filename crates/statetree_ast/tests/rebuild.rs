//! Rebuilding a tree after an edit.

use pretty_assertions::assert_eq;
use statetree_ast::{
    AstArena, Factory, HasParent, Machine, MachineFile, Node, bind_parents, create_machine_file,
    for_each_child_recursive,
};

/// Renames the machine whose id is `from`, rebuilding only the path above it.
fn rename<'a>(
    factory: &Factory<'a>,
    file: &'a MachineFile<'a>,
    from: &str,
    to: &str,
) -> &'a MachineFile<'a> {
    let machines: Vec<&'a Machine<'a>> = file
        .machines
        .iter()
        .map(|machine| {
            let id = machine
                .config
                .id
                .map(|id| if id.value == from { factory.update_id(id, to) } else { id });
            let config = factory.update_machine_config(machine.config, id);
            factory.update_machine(machine, config)
        })
        .collect();
    factory.update_machine_file(file, &machines)
}

fn ids<'a>(file: &'a MachineFile<'a>) -> Vec<&'a str> {
    let mut ids = Vec::new();
    for_each_child_recursive::<()>(Node::from(file), |node, _| {
        ids.extend(node.as_id().map(|id| id.value));
        None
    });
    ids
}

#[test]
fn test_rename_shares_untouched_machines() {
    let arena = AstArena::new();
    let factory = Factory::new(&arena);
    let file = create_machine_file(
        &factory,
        &[
            factory.create_machine(factory.create_machine_config(Some(factory.create_id("a")))),
            factory.create_machine(factory.create_machine_config(Some(factory.create_id("b")))),
            factory.create_machine(factory.create_machine_config(None)),
        ],
    );

    let renamed = rename(&factory, file, "b", "c");

    assert!(!std::ptr::eq(renamed, file));
    assert!(std::ptr::eq(renamed.machines[0], file.machines[0]));
    assert!(!std::ptr::eq(renamed.machines[1], file.machines[1]));
    assert!(std::ptr::eq(renamed.machines[2], file.machines[2]));

    assert_eq!(ids(file), vec!["a", "b"]);
    assert_eq!(ids(renamed), vec!["a", "c"]);
}

#[test]
fn test_noop_edit_returns_same_tree() {
    let arena = AstArena::new();
    let factory = Factory::new(&arena);
    let file = create_machine_file(
        &factory,
        &[factory.create_machine(factory.create_machine_config(Some(factory.create_id("a"))))],
    );

    let unchanged = rename(&factory, file, "missing", "other");
    assert!(std::ptr::eq(unchanged, file));

    let same_name = rename(&factory, file, "a", "a");
    assert!(std::ptr::eq(same_name, file));
}

#[test]
fn test_rebinding_rebuilt_tree_points_shared_nodes_at_new_root() {
    let arena = AstArena::new();
    let factory = Factory::new(&arena);
    let file = create_machine_file(
        &factory,
        &[
            factory.create_machine(factory.create_machine_config(Some(factory.create_id("a")))),
            factory.create_machine(factory.create_machine_config(Some(factory.create_id("b")))),
        ],
    );

    let renamed = bind_parents(rename(&factory, file, "a", "z"));

    let shared = renamed.machines[1];
    assert!(std::ptr::eq(shared, file.machines[1]));
    assert!(std::ptr::eq(shared.parent().unwrap(), renamed));

    let mut stale = Vec::new();
    for_each_child_recursive::<()>(Node::from(renamed), |node, parent| {
        if !node.parent().is_some_and(|bound| bound.ptr_eq(&parent)) {
            stale.push(node.kind());
        }
        None
    });
    assert_eq!(stale, Vec::new());

    // binding the old root again moves the shared machine back
    bind_parents(file);
    assert!(std::ptr::eq(shared.parent().unwrap(), file));
    assert!(std::ptr::eq(renamed.machines[0].parent().unwrap(), renamed));
}
