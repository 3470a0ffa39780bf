use algoviz_core::info::Category;
use algoviz_core::registry::Registry;

#[test]
fn all_known_identifiers_resolve() {
    let registry = Registry::new();
    assert_eq!(
        registry.sorting_ids(),
        vec!["bubble", "heap", "insertion", "merge", "quick", "selection"]
    );
    assert_eq!(registry.tree_ids(), vec!["avl", "bst"]);

    for id in registry.sorting_ids() {
        let algo = registry.sorting(id).unwrap();
        assert_eq!(algo.id, id);
        let info = (algo.info)();
        assert_eq!(info.category, Category::Sorting);
        assert_eq!(info.name, algo.name);
    }
    for id in registry.tree_ids() {
        let algo = registry.tree(id).unwrap();
        assert_eq!((algo.info)().category, Category::Tree);
    }
}

#[test]
fn unknown_identifiers_return_none() {
    let registry = Registry::new();
    assert!(registry.sorting("bogo").is_none());
    assert!(registry.tree("b-tree").is_none());
    assert!(registry.info("bogo").is_none());
    assert!(registry.sorting_steps("bogo", &[1, 2]).is_none());
}

#[test]
fn info_covers_both_families() {
    let registry = Registry::new();
    assert_eq!(registry.info("quick").unwrap().name, "Quick Sort");
    assert_eq!(registry.info("bst").unwrap().name, "Binary Search Tree");
    assert_eq!(registry.info("avl").unwrap().name, "AVL Tree");
}

#[test]
fn sorting_steps_dispatches_to_the_named_generator() {
    let registry = Registry::new();
    let via_registry = registry.sorting_steps("bubble", &[3, 1, 2]).unwrap();
    let direct = algoviz_core::sorting::bubble::get_steps(&[3, 1, 2]);
    assert_eq!(via_registry, direct);
}

#[test]
fn tree_operation_sets_match_the_catalog() {
    let registry = Registry::new();

    let bst = registry.tree("bst").unwrap().operations;
    assert!(bst.insert && bst.delete && bst.search && bst.traversal);
    assert!(!bst.create_balanced);

    let avl = registry.tree("avl").unwrap().operations;
    assert!(avl.insert && avl.create_balanced);
    assert!(!avl.delete && !avl.search && !avl.traversal);
}

#[test]
fn registries_own_independent_tree_sessions() {
    let mut a = Registry::new();
    let mut b = Registry::new();

    let first = a.bst_mut().insert(&[1, 2], None);
    let root_a = first.root.unwrap();
    assert_eq!(root_a.id.as_str(), "node-0");

    // A fresh registry starts its own counter from zero.
    let root_b = b.bst_mut().insert(&[9], None).root.unwrap();
    assert_eq!(root_b.id.as_str(), "node-0");

    // AVL ids live in a separate namespace within the same registry.
    let avl_root = a.avl_mut().insert(&[5], None).root.unwrap();
    assert_eq!(avl_root.id.as_str(), "avl-node-0");
}
