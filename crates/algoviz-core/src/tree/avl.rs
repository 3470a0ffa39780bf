//! Self-balancing AVL-tree step generator.
//!
//! Insertion follows the textbook recipe: BST descent, bottom-up height
//! update, balance-factor check, then one of the four rotation cases. Each
//! primitive rotation emits its own step; the combined cases emit an extra
//! descriptive step first.

use crate::ids::NodeIdGen;
use crate::info::{AlgorithmInfo, Category, TimeComplexity};
use crate::step::{InsertPosition, RotationKind, StepKind, Trace};
use crate::tree::node::{layout, TreeNode};
use crate::tree::TreeUpdate;

/// AVL operation session. Node ids are minted as `avl-node-<n>`, keeping the
/// namespace disjoint from BST ids.
#[derive(Debug)]
pub struct Avl {
    ids: NodeIdGen,
}

impl Default for Avl {
    fn default() -> Self {
        Self::new()
    }
}

impl Avl {
    pub fn new() -> Self {
        Self {
            ids: NodeIdGen::new("avl-node"),
        }
    }

    /// Insert `values` one at a time, in order, rebalancing after each
    /// insertion. Exact duplicates are silently ignored: the subtree is
    /// returned unchanged and no step is emitted.
    pub fn insert(&mut self, values: &[i64], existing: Option<TreeNode>) -> TreeUpdate {
        let mut trace = Trace::new();
        let mut root = existing.map(Box::new);

        for &value in values {
            root = Some(self.insert_rec(root.take(), value, &mut trace));
        }

        let mut root = root.map(|b| *b);
        if let Some(r) = root.as_mut() {
            layout(r);
        }

        TreeUpdate {
            steps: trace.into_steps(),
            root,
        }
    }

    fn insert_rec(
        &mut self,
        node: Option<Box<TreeNode>>,
        value: i64,
        trace: &mut Trace,
    ) -> Box<TreeNode> {
        let Some(mut node) = node else {
            let id = self.ids.mint();
            let mut node = TreeNode::new(id.clone(), value);
            node.height = Some(1);

            trace.record(
                StepKind::TreeInsert {
                    node_id: id,
                    value,
                    parent_id: None,
                    position: InsertPosition::Root,
                },
                format!("Inserting {value} as new node"),
            );

            return Box::new(node);
        };

        if value < node.value {
            node.left = Some(self.insert_rec(node.left.take(), value, trace));
        } else if value > node.value {
            node.right = Some(self.insert_rec(node.right.take(), value, trace));
        } else {
            // Exact duplicate: subtree unchanged, no step.
            return node;
        }

        update_height(&mut node);
        let balance = balance_of(&node);

        if balance > 1 {
            let left = node.left.as_deref().expect("left-heavy node has a left child");
            if value < left.value {
                // Left-Left
                return right_rotate(node, trace);
            }
            if value > left.value {
                // Left-Right
                let left_right = left
                    .right
                    .as_deref()
                    .expect("left-right case has an inner grandchild");
                trace.record(
                    StepKind::TreeRotation {
                        rotation_type: RotationKind::LeftRight,
                        root_node_id: node.id.clone(),
                        affected_node_ids: vec![left.id.clone(), left_right.id.clone()],
                    },
                    "Left-Right case detected: First performing left rotation on left subtree"
                        .to_string(),
                );

                let left = node.left.take().expect("left child present");
                node.left = Some(left_rotate(left, trace));
                return right_rotate(node, trace);
            }
        }

        if balance < -1 {
            let right = node
                .right
                .as_deref()
                .expect("right-heavy node has a right child");
            if value > right.value {
                // Right-Right
                return left_rotate(node, trace);
            }
            if value < right.value {
                // Right-Left
                let right_left = right
                    .left
                    .as_deref()
                    .expect("right-left case has an inner grandchild");
                trace.record(
                    StepKind::TreeRotation {
                        rotation_type: RotationKind::RightLeft,
                        root_node_id: node.id.clone(),
                        affected_node_ids: vec![right.id.clone(), right_left.id.clone()],
                    },
                    "Right-Left case detected: First performing right rotation on right subtree"
                        .to_string(),
                );

                let right = node.right.take().expect("right child present");
                node.right = Some(right_rotate(right, trace));
                return left_rotate(node, trace);
            }
        }

        node
    }

    /// Build a minimum-height tree directly from a sorted copy of `values`
    /// via recursive midpoint selection. No steps are produced; this path is
    /// for seeding demonstrations.
    pub fn create_balanced(&mut self, values: &[i64]) -> Option<TreeNode> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_unstable();

        let mut root = self.build_balanced(&sorted)?;
        layout(&mut root);
        Some(*root)
    }

    fn build_balanced(&mut self, values: &[i64]) -> Option<Box<TreeNode>> {
        if values.is_empty() {
            return None;
        }

        let mid = (values.len() - 1) / 2;
        let mut node = Box::new(TreeNode::new(self.ids.mint(), values[mid]));
        node.height = Some(1);
        node.left = self.build_balanced(&values[..mid]);
        node.right = self.build_balanced(&values[mid + 1..]);
        update_height(&mut node);
        Some(node)
    }
}

/// Height of an optional subtree; absent children count as 0.
fn height_of(node: Option<&TreeNode>) -> i64 {
    node.and_then(|n| n.height).map_or(0, i64::from)
}

fn update_height(node: &mut TreeNode) {
    let h = 1 + height_of(node.left.as_deref()).max(height_of(node.right.as_deref()));
    node.height = Some(h as u32);
}

/// Left-subtree height minus right-subtree height.
fn balance_of(node: &TreeNode) -> i64 {
    height_of(node.left.as_deref()) - height_of(node.right.as_deref())
}

/// Rotate the three-node triangle rooted at `y` to the right. `y`'s left
/// child becomes the subtree root; heights are recomputed child-first since a
/// node's height depends on its children.
fn right_rotate(mut y: Box<TreeNode>, trace: &mut Trace) -> Box<TreeNode> {
    let mut x = y.left.take().expect("right rotation requires a left child");
    let t2 = x.right.take();

    let mut affected = vec![x.id.clone(), y.id.clone()];
    if let Some(t) = t2.as_deref() {
        affected.push(t.id.clone());
    }
    trace.record(
        StepKind::TreeRotation {
            rotation_type: RotationKind::Right,
            root_node_id: y.id.clone(),
            affected_node_ids: affected,
        },
        format!(
            "Performing right rotation: {} becomes right child of {}",
            y.value, x.value
        ),
    );

    y.left = t2;
    update_height(&mut y);
    x.right = Some(y);
    update_height(&mut x);
    x
}

/// Mirror image of [`right_rotate`].
fn left_rotate(mut x: Box<TreeNode>, trace: &mut Trace) -> Box<TreeNode> {
    let mut y = x.right.take().expect("left rotation requires a right child");
    let t2 = y.left.take();

    let mut affected = vec![x.id.clone(), y.id.clone()];
    if let Some(t) = t2.as_deref() {
        affected.push(t.id.clone());
    }
    trace.record(
        StepKind::TreeRotation {
            rotation_type: RotationKind::Left,
            root_node_id: x.id.clone(),
            affected_node_ids: affected,
        },
        format!(
            "Performing left rotation: {} becomes left child of {}",
            x.value, y.value
        ),
    );

    x.right = t2;
    update_height(&mut x);
    y.left = Some(x);
    update_height(&mut y);
    y
}

pub fn info() -> AlgorithmInfo {
    AlgorithmInfo {
        name: "AVL Tree".into(),
        category: Category::Tree,
        time_complexity: TimeComplexity::new("O(log n)", "O(log n)", "O(log n)"),
        space_complexity: "O(n)".into(),
        description: "An AVL tree is a self-balancing binary search tree where the heights of \
                      the two child subtrees of any node differ by at most one. If they differ \
                      by more than one, rebalancing is done through rotations to restore this \
                      property."
            .into(),
        pseudocode: AlgorithmInfo::pseudocode_from(&[
            "Insert(value):",
            "  1. Perform normal BST insertion",
            "  2. Update height of current node",
            "  3. Get balance factor",
            "  4. If unbalanced, perform rotations:",
            "     - Left Left Case: Right Rotate",
            "     - Right Right Case: Left Rotate",
            "     - Left Right Case: Left Rotate + Right Rotate",
            "     - Right Left Case: Right Rotate + Left Rotate",
        ]),
        stable: None,
    }
}
