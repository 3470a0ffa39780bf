//! Wire-shape checks for the serialized step records.

use serde_json::{json, Value};

use algoviz_core::ids::{NodeId, StepId};
use algoviz_core::step::{
    HighlightKind, InsertPosition, RotationKind, Step, StepKind, TraversalKind,
};

fn to_value(step: &Step) -> Value {
    serde_json::to_value(step).unwrap()
}

#[test]
fn compare_step_shape() {
    let step = Step {
        id: StepId(0),
        description: "Comparing elements at positions 0 and 1".into(),
        kind: StepKind::Compare {
            indices: [0, 1],
            values: [5, 3],
        },
    };
    assert_eq!(
        to_value(&step),
        json!({
            "id": "step-0",
            "description": "Comparing elements at positions 0 and 1",
            "type": "compare",
            "indices": [0, 1],
            "values": [5, 3],
        })
    );
}

#[test]
fn overwrite_and_highlight_use_camel_case_fields() {
    let overwrite = Step {
        id: StepId(3),
        description: "Moving 5 to position 2".into(),
        kind: StepKind::Overwrite {
            index: 2,
            old_value: 3,
            new_value: 5,
        },
    };
    let value = to_value(&overwrite);
    assert_eq!(value["type"], "overwrite");
    assert_eq!(value["oldValue"], 3);
    assert_eq!(value["newValue"], 5);

    let highlight = Step {
        id: StepId(4),
        description: "Array is sorted".into(),
        kind: StepKind::Highlight {
            indices: vec![0, 1, 2],
            highlight_type: HighlightKind::Sorted,
        },
    };
    let value = to_value(&highlight);
    assert_eq!(value["type"], "highlight");
    assert_eq!(value["highlightType"], "sorted");
    assert_eq!(value["indices"], json!([0, 1, 2]));
}

#[test]
fn merge_step_shape() {
    let step = Step {
        id: StepId(9),
        description: "Taking 2 from the left half".into(),
        kind: StepKind::Merge {
            source_indices: vec![1],
            target_index: 0,
            values: vec![2],
        },
    };
    let value = to_value(&step);
    assert_eq!(value["type"], "merge");
    assert_eq!(value["sourceIndices"], json!([1]));
    assert_eq!(value["targetIndex"], 0);
    assert_eq!(value["values"], json!([2]));
}

#[test]
fn tree_insert_omits_absent_parent() {
    let root_insert = Step {
        id: StepId(0),
        description: "Inserting 50 as root node".into(),
        kind: StepKind::TreeInsert {
            node_id: NodeId("node-0".into()),
            value: 50,
            parent_id: None,
            position: InsertPosition::Root,
        },
    };
    let value = to_value(&root_insert);
    assert_eq!(value["type"], "tree-insert");
    assert_eq!(value["nodeId"], "node-0");
    assert_eq!(value["position"], "root");
    assert!(value.get("parentId").is_none());

    let child_insert = Step {
        id: StepId(2),
        description: "Inserting 30 as left child of 50".into(),
        kind: StepKind::TreeInsert {
            node_id: NodeId("node-1".into()),
            value: 30,
            parent_id: Some(NodeId("node-0".into())),
            position: InsertPosition::Left,
        },
    };
    let value = to_value(&child_insert);
    assert_eq!(value["parentId"], "node-0");
    assert_eq!(value["position"], "left");
}

#[test]
fn tree_search_not_found_carries_empty_node_id() {
    let step = Step {
        id: StepId(5),
        description: "45 is not in the tree".into(),
        kind: StepKind::TreeSearch {
            node_id: NodeId::none(),
            found: false,
            search_value: 45,
        },
    };
    let value = to_value(&step);
    assert_eq!(value["type"], "tree-search");
    assert_eq!(value["nodeId"], "");
    assert_eq!(value["found"], false);
    assert_eq!(value["searchValue"], 45);
}

#[test]
fn rotation_and_traversal_tags_are_kebab_case() {
    let rotation = Step {
        id: StepId(1),
        description: "Left-right rotation needed".into(),
        kind: StepKind::TreeRotation {
            rotation_type: RotationKind::LeftRight,
            root_node_id: NodeId("avl-node-0".into()),
            affected_node_ids: vec![NodeId("avl-node-1".into()), NodeId("avl-node-2".into())],
        },
    };
    let value = to_value(&rotation);
    assert_eq!(value["type"], "tree-rotation");
    assert_eq!(value["rotationType"], "left-right");
    assert_eq!(value["rootNodeId"], "avl-node-0");
    assert_eq!(
        value["affectedNodeIds"],
        json!(["avl-node-1", "avl-node-2"])
    );

    let traversal = Step {
        id: StepId(2),
        description: "Visiting node 20".into(),
        kind: StepKind::TreeTraversal {
            node_id: NodeId("node-3".into()),
            traversal_type: TraversalKind::Inorder,
            visit_order: 0,
        },
    };
    let value = to_value(&traversal);
    assert_eq!(value["type"], "tree-traversal");
    assert_eq!(value["traversalType"], "inorder");
    assert_eq!(value["visitOrder"], 0);
}

#[test]
fn steps_round_trip_through_json() {
    let steps = vec![
        Step {
            id: StepId(0),
            description: "Comparing elements at positions 0 and 1".into(),
            kind: StepKind::Compare {
                indices: [0, 1],
                values: [2, 1],
            },
        },
        Step {
            id: StepId(1),
            description: "Swapping elements".into(),
            kind: StepKind::Swap {
                indices: [0, 1],
                values: [2, 1],
            },
        },
        Step {
            id: StepId(2),
            description: "Deleting node".into(),
            kind: StepKind::TreeDelete {
                node_id: NodeId("node-4".into()),
                replacement_node_id: Some(NodeId("node-7".into())),
            },
        },
    ];

    let text = serde_json::to_string(&steps).unwrap();
    let back: Vec<Step> = serde_json::from_str(&text).unwrap();
    assert_eq!(back, steps);
}

#[test]
fn generated_traces_serialize_with_sequential_string_ids() {
    let steps = algoviz_core::sorting::bubble::get_steps(&[3, 1, 2]);
    let value = serde_json::to_value(&steps).unwrap();
    let array = value.as_array().unwrap();
    for (i, entry) in array.iter().enumerate() {
        assert_eq!(entry["id"], format!("step-{i}"));
        assert!(entry["type"].is_string());
    }
}
