//! Owned binary-tree node and the shared layout pass.

use serde::{Deserialize, Serialize};

use crate::ids::NodeId;

/// Canvas position of the root node.
pub const ROOT_X: f32 = 400.0;
pub const ROOT_Y: f32 = 50.0;
/// Vertical distance between levels.
pub const ROW_HEIGHT: f32 = 80.0;
/// Horizontal spread allotted to the root; halved at every level below.
pub const ROOT_SPREAD: f32 = 200.0;

/// A tree node. Children are exclusively owned by their parent; a node has at
/// most one parent by construction. `height` is maintained by the AVL
/// generator only and stays `None` for plain BST nodes. `x`/`y` are layout
/// coordinates recomputed after every structural change and carry no logical
/// meaning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: NodeId,
    pub value: i64,
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<TreeNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<TreeNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl TreeNode {
    pub fn new(id: NodeId, value: i64) -> Self {
        Self {
            id,
            value,
            x: 0.0,
            y: 0.0,
            left: None,
            right: None,
            height: None,
        }
    }

    /// Number of nodes in this subtree.
    pub fn len(&self) -> usize {
        1 + self.left.as_deref().map_or(0, TreeNode::len)
            + self.right.as_deref().map_or(0, TreeNode::len)
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Find a node by value using ordinary BST descent.
    pub fn find(&self, value: i64) -> Option<&TreeNode> {
        if value == self.value {
            Some(self)
        } else if value < self.value {
            self.left.as_deref().and_then(|n| n.find(value))
        } else {
            self.right.as_deref().and_then(|n| n.find(value))
        }
    }

    /// Values in ascending (in-order) order.
    pub fn values_inorder(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len());
        self.collect_inorder(&mut out);
        out
    }

    fn collect_inorder(&self, out: &mut Vec<i64>) {
        if let Some(l) = self.left.as_deref() {
            l.collect_inorder(out);
        }
        out.push(self.value);
        if let Some(r) = self.right.as_deref() {
            r.collect_inorder(out);
        }
    }
}

/// Recompute every node's canvas position: root at a canonical center,
/// children offset horizontally by a halving spread and vertically by a fixed
/// row height.
pub fn layout(root: &mut TreeNode) {
    assign_positions(root, ROOT_X, ROOT_Y, ROOT_SPREAD);
}

fn assign_positions(node: &mut TreeNode, x: f32, y: f32, spread: f32) {
    node.x = x;
    node.y = y;

    let child_y = y + ROW_HEIGHT;
    let child_spread = spread / 2.0;

    if let Some(left) = node.left.as_deref_mut() {
        assign_positions(left, x - child_spread, child_y, child_spread);
    }
    if let Some(right) = node.right.as_deref_mut() {
        assign_positions(right, x + child_spread, child_y, child_spread);
    }
}
