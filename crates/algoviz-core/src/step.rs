//! Step vocabulary shared by the sorting and tree generators.
//!
//! A trace is a flat `Vec<Step>`; every step carries a sequential [`StepId`]
//! and a human-readable description, with the operation payload in an
//! internally-tagged [`StepKind`]. Serialized JSON keeps the original wire
//! shape consumed by the rendering layer (kebab-case `type` tags, camelCase
//! payload fields).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::{NodeId, StepId};

/// Semantic role a highlight step assigns to array indices.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighlightKind {
    Active,
    Sorted,
    Pivot,
    Merge,
    Partition,
}

/// Where an inserted tree node was attached relative to its parent.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsertPosition {
    Left,
    Right,
    Root,
}

impl fmt::Display for InsertPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InsertPosition::Left => "left",
            InsertPosition::Right => "right",
            InsertPosition::Root => "root",
        })
    }
}

/// AVL rebalancing rotation family.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RotationKind {
    Left,
    Right,
    LeftRight,
    RightLeft,
}

/// Order in which a traversal visits nodes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalKind {
    Inorder,
    Preorder,
    Postorder,
}

/// Payload of one primitive operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum StepKind {
    /// Two elements were compared; no data changed.
    Compare {
        indices: [usize; 2],
        values: [i64; 2],
    },
    /// Two elements exchanged positions. Values are pre-swap.
    Swap {
        indices: [usize; 2],
        values: [i64; 2],
    },
    /// An in-place write (insertion-sort shifts and final placement).
    #[serde(rename_all = "camelCase")]
    Overwrite {
        index: usize,
        old_value: i64,
        new_value: i64,
    },
    /// Cosmetic marker for one or more indices; no data changed.
    #[serde(rename_all = "camelCase")]
    Highlight {
        indices: Vec<usize>,
        highlight_type: HighlightKind,
    },
    /// Values copied from source positions into a target slot during a merge.
    #[serde(rename_all = "camelCase")]
    Merge {
        source_indices: Vec<usize>,
        target_index: usize,
        values: Vec<i64>,
    },
    /// A node was created and attached to the tree.
    #[serde(rename_all = "camelCase")]
    TreeInsert {
        node_id: NodeId,
        value: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        parent_id: Option<NodeId>,
        position: InsertPosition,
    },
    /// A node was removed, possibly replaced by another node.
    #[serde(rename_all = "camelCase")]
    TreeDelete {
        node_id: NodeId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        replacement_node_id: Option<NodeId>,
    },
    /// A rebalancing rotation occurred around `root_node_id`.
    #[serde(rename_all = "camelCase")]
    TreeRotation {
        rotation_type: RotationKind,
        root_node_id: NodeId,
        affected_node_ids: Vec<NodeId>,
    },
    /// A node was visited during a traversal walk.
    #[serde(rename_all = "camelCase")]
    TreeTraversal {
        node_id: NodeId,
        traversal_type: TraversalKind,
        visit_order: usize,
    },
    /// A node was probed while searching. `node_id` is the empty id when the
    /// probe ran off the tree.
    #[serde(rename_all = "camelCase")]
    TreeSearch {
        node_id: NodeId,
        found: bool,
        search_value: i64,
    },
}

/// One atomic, typed record of an algorithm's primitive action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: StepId,
    pub description: String,
    #[serde(flatten)]
    pub kind: StepKind,
}

/// Accumulates steps for a single generator run, minting gap-free ids
/// starting at 0. Created fresh per call; there is no cross-call state.
#[derive(Debug, Default)]
pub struct Trace {
    steps: Vec<Step>,
    next_id: u32,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step, assigning the next sequential id.
    pub fn record(&mut self, kind: StepKind, description: String) {
        let id = StepId(self.next_id);
        self.next_id += 1;
        self.steps.push(Step {
            id,
            description,
            kind,
        });
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_ids_are_sequential() {
        let mut trace = Trace::new();
        trace.record(
            StepKind::Highlight {
                indices: vec![0],
                highlight_type: HighlightKind::Sorted,
            },
            "first".into(),
        );
        trace.record(
            StepKind::Compare {
                indices: [0, 1],
                values: [2, 1],
            },
            "second".into(),
        );
        let steps = trace.into_steps();
        assert_eq!(steps[0].id, StepId(0));
        assert_eq!(steps[1].id, StepId(1));
    }
}
