use algoviz_core::step::{RotationKind, Step, StepKind, TraversalKind};
use algoviz_core::tree::{Avl, Bst, TreeNode};
use algoviz_core::StepId;

fn assert_well_formed(steps: &[Step]) {
    for (i, step) in steps.iter().enumerate() {
        assert_eq!(step.id, StepId(i as u32), "gap at index {i}");
        assert!(!step.description.is_empty());
    }
}

/// Every node's left subtree strictly smaller, right subtree strictly
/// greater.
fn assert_search_order(node: &TreeNode, min: Option<i64>, max: Option<i64>) {
    if let Some(min) = min {
        assert!(node.value > min, "value {} violates lower bound {min}", node.value);
    }
    if let Some(max) = max {
        assert!(node.value < max, "value {} violates upper bound {max}", node.value);
    }
    if let Some(l) = node.left.as_deref() {
        assert_search_order(l, min, Some(node.value));
    }
    if let Some(r) = node.right.as_deref() {
        assert_search_order(r, Some(node.value), max);
    }
}

/// Structural height in nodes, independent of the stored `height` field.
fn measured_height(node: Option<&TreeNode>) -> i64 {
    match node {
        None => 0,
        Some(n) => {
            1 + measured_height(n.left.as_deref()).max(measured_height(n.right.as_deref()))
        }
    }
}

fn assert_avl_balanced(node: &TreeNode) {
    let lh = measured_height(node.left.as_deref());
    let rh = measured_height(node.right.as_deref());
    assert!(
        (lh - rh).abs() <= 1,
        "node {} out of balance ({lh} vs {rh})",
        node.value
    );
    if let Some(l) = node.left.as_deref() {
        assert_avl_balanced(l);
    }
    if let Some(r) = node.right.as_deref() {
        assert_avl_balanced(r);
    }
}

fn build_bst(values: &[i64]) -> (Bst, TreeNode) {
    let mut bst = Bst::new();
    let update = bst.insert(values, None);
    (bst, update.root.expect("non-empty tree"))
}

#[test]
fn bst_small_preset_has_expected_shape() {
    let (_, root) = build_bst(&[50, 30, 70, 20, 40, 60, 80]);

    assert_eq!(root.value, 50);
    assert_search_order(&root, None, None);

    let mut left_values = root.left.as_deref().unwrap().values_inorder();
    let mut right_values = root.right.as_deref().unwrap().values_inorder();
    left_values.sort_unstable();
    right_values.sort_unstable();
    assert_eq!(left_values, vec![20, 30, 40]);
    assert_eq!(right_values, vec![60, 70, 80]);
}

#[test]
fn bst_insert_traces_are_well_formed_and_ids_prefixed() {
    let mut bst = Bst::new();
    let update = bst.insert(&[50, 30, 70], None);
    assert_well_formed(&update.steps);

    let root = update.root.unwrap();
    assert_eq!(root.id.as_str(), "node-0");
    assert_eq!(root.left.as_deref().unwrap().id.as_str(), "node-1");
    assert_eq!(root.right.as_deref().unwrap().id.as_str(), "node-2");
}

#[test]
fn bst_duplicate_insert_is_a_flagged_no_op() {
    let mut bst = Bst::new();
    let first = bst.insert(&[5], None);
    let second = bst.insert(&[5], first.root);

    let root = second.root.unwrap();
    assert_eq!(root.len(), 1);

    // The duplicate is reported through a found-flagged search step and no
    // insert step.
    assert!(second.steps.iter().any(|s| matches!(
        s.kind,
        StepKind::TreeSearch { found: true, .. }
    )));
    assert!(!second
        .steps
        .iter()
        .any(|s| matches!(s.kind, StepKind::TreeInsert { .. })));
}

#[test]
fn bst_incremental_insert_keeps_minting_fresh_ids() {
    let mut bst = Bst::new();
    let first = bst.insert(&[50], None);
    let second = bst.insert(&[30], first.root);

    let root = second.root.unwrap();
    assert_eq!(root.id.as_str(), "node-0");
    assert_eq!(root.left.as_deref().unwrap().id.as_str(), "node-1");
}

#[test]
fn bst_delete_leaf() {
    let (mut bst, root) = build_bst(&[50, 30, 70, 20]);
    let update = bst.delete(20, root);

    let root = update.root.unwrap();
    assert_eq!(root.len(), 3);
    assert!(root.find(20).is_none());
    assert_search_order(&root, None, None);

    assert!(update.steps.iter().any(|s| matches!(
        s.kind,
        StepKind::TreeDelete {
            replacement_node_id: None,
            ..
        }
    )));
}

#[test]
fn bst_delete_single_child_splices() {
    let (mut bst, root) = build_bst(&[50, 30, 20]);
    let update = bst.delete(30, root);

    let root = update.root.unwrap();
    assert_eq!(root.value, 50);
    assert_eq!(root.left.as_deref().unwrap().value, 20);
    assert!(update.steps.iter().any(|s| matches!(
        s.kind,
        StepKind::TreeDelete {
            replacement_node_id: Some(_),
            ..
        }
    )));
}

#[test]
fn bst_delete_two_children_uses_inorder_successor() {
    let (mut bst, root) = build_bst(&[50, 30, 70, 20, 40, 60, 80]);
    let update = bst.delete(50, root);

    let root = update.root.unwrap();
    // Smallest value of the right subtree replaces the deleted root.
    assert_eq!(root.value, 60);
    assert_eq!(root.len(), 6);
    assert!(root.find(50).is_none());
    assert_search_order(&root, None, None);
}

#[test]
fn bst_delete_missing_value_reports_not_found() {
    let (mut bst, root) = build_bst(&[50, 30, 70]);
    let before = root.clone();
    let update = bst.delete(99, root);

    let last = update.steps.last().unwrap();
    match &last.kind {
        StepKind::TreeSearch {
            node_id, found, ..
        } => {
            assert!(!found);
            assert!(node_id.is_none());
        }
        other => panic!("expected search step, got {other:?}"),
    }
    assert_eq!(update.root.unwrap(), before);
}

#[test]
fn bst_delete_last_node_empties_the_tree() {
    let (mut bst, root) = build_bst(&[42]);
    let update = bst.delete(42, root);
    assert!(update.root.is_none());
}

#[test]
fn bst_search_absent_value_ends_with_empty_node_id() {
    let (bst, root) = build_bst(&[50, 30, 70, 20, 40, 60, 80]);
    let steps = bst.search(45, &root);
    assert_well_formed(&steps);

    let last = steps.last().unwrap();
    match &last.kind {
        StepKind::TreeSearch {
            node_id,
            found,
            search_value,
        } => {
            assert!(!found);
            assert!(node_id.is_none());
            assert_eq!(*search_value, 45);
        }
        other => panic!("expected search step, got {other:?}"),
    }
}

#[test]
fn bst_search_present_value_confirms_with_found_step() {
    let (bst, root) = build_bst(&[50, 30, 70]);
    let steps = bst.search(70, &root);

    let found_steps: Vec<_> = steps
        .iter()
        .filter(|s| matches!(s.kind, StepKind::TreeSearch { found: true, .. }))
        .collect();
    // One probe step at the matching node plus the confirmation step.
    assert_eq!(found_steps.len(), 2);
}

#[test]
fn traversals_visit_in_the_expected_orders() {
    let (bst, root) = build_bst(&[50, 30, 70, 20, 40, 60, 80]);

    let visited = |kind: TraversalKind| -> Vec<i64> {
        bst.traversal(&root, kind)
            .iter()
            .map(|s| match &s.kind {
                StepKind::TreeTraversal { node_id, .. } => {
                    fn value_of(node: &TreeNode, id: &str) -> Option<i64> {
                        if node.id.as_str() == id {
                            return Some(node.value);
                        }
                        node.left
                            .as_deref()
                            .and_then(|n| value_of(n, id))
                            .or_else(|| node.right.as_deref().and_then(|n| value_of(n, id)))
                    }
                    value_of(&root, node_id.as_str()).expect("visited node exists")
                }
                other => panic!("expected traversal step, got {other:?}"),
            })
            .collect()
    };

    assert_eq!(
        visited(TraversalKind::Inorder),
        vec![20, 30, 40, 50, 60, 70, 80]
    );
    assert_eq!(
        visited(TraversalKind::Preorder),
        vec![50, 30, 20, 40, 70, 60, 80]
    );
    assert_eq!(
        visited(TraversalKind::Postorder),
        vec![20, 40, 30, 60, 80, 70, 50]
    );

    // Visit counters are zero-based and sequential.
    let steps = bst.traversal(&root, TraversalKind::Inorder);
    for (i, step) in steps.iter().enumerate() {
        match &step.kind {
            StepKind::TreeTraversal { visit_order, .. } => assert_eq!(*visit_order, i),
            other => panic!("expected traversal step, got {other:?}"),
        }
    }
}

#[test]
fn avl_ascending_insert_rebalances_with_left_rotations() {
    let mut avl = Avl::new();
    let update = avl.insert(&[10, 20, 30, 40, 50], None);
    assert_well_formed(&update.steps);

    assert!(update.steps.iter().any(|s| matches!(
        s.kind,
        StepKind::TreeRotation {
            rotation_type: RotationKind::Left,
            ..
        }
    )));

    let root = update.root.unwrap();
    assert_search_order(&root, None, None);
    assert_avl_balanced(&root);
    assert!(measured_height(Some(&root)) <= 3);
}

#[test]
fn avl_descending_insert_rebalances_with_right_rotations() {
    let mut avl = Avl::new();
    let update = avl.insert(&[50, 40, 30, 20, 10], None);

    assert!(update.steps.iter().any(|s| matches!(
        s.kind,
        StepKind::TreeRotation {
            rotation_type: RotationKind::Right,
            ..
        }
    )));

    let root = update.root.unwrap();
    assert_avl_balanced(&root);
}

#[test]
fn avl_left_right_case_emits_both_rotations() {
    let mut avl = Avl::new();
    let update = avl.insert(&[30, 10, 20], None);

    let kinds: Vec<RotationKind> = update
        .steps
        .iter()
        .filter_map(|s| match &s.kind {
            StepKind::TreeRotation { rotation_type, .. } => Some(*rotation_type),
            _ => None,
        })
        .collect();
    assert_eq!(
        kinds,
        vec![RotationKind::LeftRight, RotationKind::Left, RotationKind::Right]
    );

    let root = update.root.unwrap();
    assert_eq!(root.value, 20);
    assert_eq!(root.left.as_deref().unwrap().value, 10);
    assert_eq!(root.right.as_deref().unwrap().value, 30);
}

#[test]
fn avl_right_left_case_emits_both_rotations() {
    let mut avl = Avl::new();
    let update = avl.insert(&[10, 30, 20], None);

    let kinds: Vec<RotationKind> = update
        .steps
        .iter()
        .filter_map(|s| match &s.kind {
            StepKind::TreeRotation { rotation_type, .. } => Some(*rotation_type),
            _ => None,
        })
        .collect();
    assert_eq!(
        kinds,
        vec![RotationKind::RightLeft, RotationKind::Right, RotationKind::Left]
    );

    assert_eq!(update.root.unwrap().value, 20);
}

#[test]
fn avl_duplicate_insert_is_silently_ignored() {
    let mut avl = Avl::new();
    let first = avl.insert(&[10], None);
    let steps_before = first.steps.len();

    let second = avl.insert(&[10], first.root);
    assert_eq!(second.root.as_ref().unwrap().len(), 1);
    assert!(second.steps.is_empty(), "duplicate emitted steps");
    assert_eq!(steps_before, 1);
}

#[test]
fn avl_node_ids_use_their_own_namespace() {
    let mut avl = Avl::new();
    let update = avl.insert(&[10, 20], None);
    let root = update.root.unwrap();
    assert_eq!(root.id.as_str(), "avl-node-0");
}

#[test]
fn avl_maintains_balance_across_mixed_insertions() {
    let mut avl = Avl::new();
    let update = avl.insert(&[10, 5, 15, 2, 7, 12, 20, 1, 3, 6, 8, 11, 13, 17, 25], None);

    let root = update.root.unwrap();
    assert_search_order(&root, None, None);
    assert_avl_balanced(&root);
    assert_eq!(root.len(), 15);
}

#[test]
fn create_balanced_builds_minimum_height_without_steps() {
    let mut avl = Avl::new();
    let root = avl
        .create_balanced(&[7, 3, 5, 1, 6, 2, 4])
        .expect("non-empty input");

    assert_eq!(root.values_inorder(), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_search_order(&root, None, None);
    assert_avl_balanced(&root);
    assert_eq!(measured_height(Some(&root)), 3);

    assert!(avl.create_balanced(&[]).is_none());
}

#[test]
fn layout_follows_the_canonical_grid() {
    let (_, root) = build_bst(&[50, 30, 70]);

    assert_eq!((root.x, root.y), (400.0, 50.0));
    let left = root.left.as_deref().unwrap();
    let right = root.right.as_deref().unwrap();
    assert_eq!((left.x, left.y), (300.0, 130.0));
    assert_eq!((right.x, right.y), (500.0, 130.0));
}
