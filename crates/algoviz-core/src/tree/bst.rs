//! Plain binary-search-tree step generator.
//!
//! A [`Bst`] session owns the node-id allocator; the tree itself lives with
//! the caller, which passes the previous root back in for incremental
//! operations. Every operation returns a fully materialized trace.

use crate::ids::{NodeId, NodeIdGen};
use crate::info::{AlgorithmInfo, Category, TimeComplexity};
use crate::step::{InsertPosition, Step, StepKind, Trace, TraversalKind};
use crate::tree::node::{layout, TreeNode};
use crate::tree::TreeUpdate;

/// BST operation session. Node ids are minted as `node-<n>`, monotonically
/// within the session lifetime.
#[derive(Debug)]
pub struct Bst {
    ids: NodeIdGen,
}

impl Default for Bst {
    fn default() -> Self {
        Self::new()
    }
}

impl Bst {
    pub fn new() -> Self {
        Self {
            ids: NodeIdGen::new("node"),
        }
    }

    /// Insert `values` one at a time, in order, into `existing` (or build a
    /// fresh tree). Duplicates leave the structure untouched and are reported
    /// through a found-flagged search step.
    pub fn insert(&mut self, values: &[i64], existing: Option<TreeNode>) -> TreeUpdate {
        let mut trace = Trace::new();
        let mut root = existing.map(Box::new);

        for &value in values {
            self.insert_one(&mut root, value, &mut trace);
        }

        TreeUpdate {
            steps: trace.into_steps(),
            root: root.map(|b| *b),
        }
    }

    fn insert_one(&mut self, root: &mut Option<Box<TreeNode>>, value: i64, trace: &mut Trace) {
        let mut cur: &mut Option<Box<TreeNode>> = root;
        let mut parent: Option<(NodeId, i64, InsertPosition)> = None;

        loop {
            match cur {
                Some(node) => {
                    trace.record(
                        StepKind::TreeSearch {
                            node_id: node.id.clone(),
                            found: false,
                            search_value: value,
                        },
                        format!(
                            "Comparing {value} with {} at node {}",
                            node.value, node.id
                        ),
                    );

                    if value < node.value {
                        parent = Some((node.id.clone(), node.value, InsertPosition::Left));
                        cur = &mut node.left;
                    } else if value > node.value {
                        parent = Some((node.id.clone(), node.value, InsertPosition::Right));
                        cur = &mut node.right;
                    } else {
                        // Value already present; no structural change.
                        trace.record(
                            StepKind::TreeSearch {
                                node_id: node.id.clone(),
                                found: true,
                                search_value: value,
                            },
                            format!("Value {value} already exists in the tree"),
                        );
                        return;
                    }
                }
                None => {
                    let id = self.ids.mint();
                    let node = TreeNode::new(id.clone(), value);

                    match &parent {
                        None => trace.record(
                            StepKind::TreeInsert {
                                node_id: id,
                                value,
                                parent_id: None,
                                position: InsertPosition::Root,
                            },
                            format!("Inserting {value} as root node"),
                        ),
                        Some((parent_id, parent_value, position)) => trace.record(
                            StepKind::TreeInsert {
                                node_id: id,
                                value,
                                parent_id: Some(parent_id.clone()),
                                position: *position,
                            },
                            format!(
                                "Inserting {value} as {position} child of {parent_value}"
                            ),
                        ),
                    }

                    *cur = Some(Box::new(node));
                    break;
                }
            }
        }

        if let Some(r) = root.as_deref_mut() {
            layout(r);
        }
    }

    /// Delete `value` from the tree. The locate phase emits one search step
    /// per visited node; an absent value is reported through a single
    /// not-found step and leaves the tree unchanged. Two-children nodes are
    /// replaced by their in-order successor.
    pub fn delete(&mut self, value: i64, root: TreeNode) -> TreeUpdate {
        let mut trace = Trace::new();

        if !Self::probe(Some(&root), value, &mut trace) {
            trace.record(
                StepKind::TreeSearch {
                    node_id: NodeId::none(),
                    found: false,
                    search_value: value,
                },
                format!("Value {value} not found in the tree"),
            );
            return TreeUpdate {
                steps: trace.into_steps(),
                root: Some(root),
            };
        }

        let mut new_root = Self::delete_rec(Some(Box::new(root)), value, &mut trace);
        if let Some(r) = new_root.as_deref_mut() {
            layout(r);
        }

        TreeUpdate {
            steps: trace.into_steps(),
            root: new_root.map(|b| *b),
        }
    }

    /// Root-to-target descent emitting one search step per visited node.
    fn probe(node: Option<&TreeNode>, value: i64, trace: &mut Trace) -> bool {
        let Some(node) = node else {
            return false;
        };

        trace.record(
            StepKind::TreeSearch {
                node_id: node.id.clone(),
                found: node.value == value,
                search_value: value,
            },
            format!(
                "Searching for {value}, currently at node with value {}",
                node.value
            ),
        );

        if value == node.value {
            true
        } else if value < node.value {
            Self::probe(node.left.as_deref(), value, trace)
        } else {
            Self::probe(node.right.as_deref(), value, trace)
        }
    }

    fn delete_rec(
        node: Option<Box<TreeNode>>,
        value: i64,
        trace: &mut Trace,
    ) -> Option<Box<TreeNode>> {
        let mut node = node?;

        if value < node.value {
            node.left = Self::delete_rec(node.left.take(), value, trace);
            return Some(node);
        }
        if value > node.value {
            node.right = Self::delete_rec(node.right.take(), value, trace);
            return Some(node);
        }

        match (node.left.is_some(), node.right.is_some()) {
            (false, false) => {
                trace.record(
                    StepKind::TreeDelete {
                        node_id: node.id.clone(),
                        replacement_node_id: None,
                    },
                    format!("Deleting leaf node {value}"),
                );
                None
            }
            (false, true) => {
                let right = node.right.take();
                trace.record(
                    StepKind::TreeDelete {
                        node_id: node.id.clone(),
                        replacement_node_id: right.as_deref().map(|n| n.id.clone()),
                    },
                    format!("Deleting node {value} and replacing with right child"),
                );
                right
            }
            (true, false) => {
                let left = node.left.take();
                trace.record(
                    StepKind::TreeDelete {
                        node_id: node.id.clone(),
                        replacement_node_id: left.as_deref().map(|n| n.id.clone()),
                    },
                    format!("Deleting node {value} and replacing with left child"),
                );
                left
            }
            (true, true) => {
                // In-order successor: leftmost node of the right subtree.
                let (successor_id, successor_value) = {
                    let mut m = node.right.as_deref().expect("right child present");
                    while let Some(l) = m.left.as_deref() {
                        m = l;
                    }
                    (m.id.clone(), m.value)
                };

                trace.record(
                    StepKind::TreeDelete {
                        node_id: node.id.clone(),
                        replacement_node_id: Some(successor_id),
                    },
                    format!(
                        "Deleting node {value} and replacing with inorder successor {successor_value}"
                    ),
                );

                node.value = successor_value;
                node.right = Self::delete_rec(node.right.take(), successor_value, trace);
                Some(node)
            }
        }
    }

    /// Standard root-to-target descent. One search step per visited node; a
    /// match is confirmed by an extra found step, running off the tree by a
    /// not-found step carrying the empty node id.
    pub fn search(&self, value: i64, root: &TreeNode) -> Vec<Step> {
        let mut trace = Trace::new();
        Self::search_rec(Some(root), value, &mut trace);
        trace.into_steps()
    }

    fn search_rec(node: Option<&TreeNode>, value: i64, trace: &mut Trace) -> bool {
        let Some(node) = node else {
            trace.record(
                StepKind::TreeSearch {
                    node_id: NodeId::none(),
                    found: false,
                    search_value: value,
                },
                format!("Reached null node - {value} not found in tree"),
            );
            return false;
        };

        trace.record(
            StepKind::TreeSearch {
                node_id: node.id.clone(),
                found: node.value == value,
                search_value: value,
            },
            format!(
                "Searching for {value}, currently at node with value {}",
                node.value
            ),
        );

        if value == node.value {
            trace.record(
                StepKind::TreeSearch {
                    node_id: node.id.clone(),
                    found: true,
                    search_value: value,
                },
                format!("Found {value} at node {}!", node.id),
            );
            return true;
        }

        if value < node.value {
            Self::search_rec(node.left.as_deref(), value, trace)
        } else {
            Self::search_rec(node.right.as_deref(), value, trace)
        }
    }

    /// Recursive walk emitting one traversal step per node with a zero-based
    /// visit counter.
    pub fn traversal(&self, root: &TreeNode, kind: TraversalKind) -> Vec<Step> {
        let mut trace = Trace::new();
        let mut visit_order = 0usize;
        Self::walk(root, kind, &mut visit_order, &mut trace);
        trace.into_steps()
    }

    fn walk(node: &TreeNode, kind: TraversalKind, visit_order: &mut usize, trace: &mut Trace) {
        let visit = |node: &TreeNode, visit_order: &mut usize, trace: &mut Trace| {
            let order_note = match kind {
                TraversalKind::Inorder => "inorder: left, root, right",
                TraversalKind::Preorder => "preorder: root, left, right",
                TraversalKind::Postorder => "postorder: left, right, root",
            };
            trace.record(
                StepKind::TreeTraversal {
                    node_id: node.id.clone(),
                    traversal_type: kind,
                    visit_order: *visit_order,
                },
                format!("Visiting node {} ({order_note})", node.value),
            );
            *visit_order += 1;
        };

        match kind {
            TraversalKind::Inorder => {
                if let Some(l) = node.left.as_deref() {
                    Self::walk(l, kind, visit_order, trace);
                }
                visit(node, visit_order, trace);
                if let Some(r) = node.right.as_deref() {
                    Self::walk(r, kind, visit_order, trace);
                }
            }
            TraversalKind::Preorder => {
                visit(node, visit_order, trace);
                if let Some(l) = node.left.as_deref() {
                    Self::walk(l, kind, visit_order, trace);
                }
                if let Some(r) = node.right.as_deref() {
                    Self::walk(r, kind, visit_order, trace);
                }
            }
            TraversalKind::Postorder => {
                if let Some(l) = node.left.as_deref() {
                    Self::walk(l, kind, visit_order, trace);
                }
                if let Some(r) = node.right.as_deref() {
                    Self::walk(r, kind, visit_order, trace);
                }
                visit(node, visit_order, trace);
            }
        }
    }
}

pub fn info() -> AlgorithmInfo {
    AlgorithmInfo {
        name: "Binary Search Tree".into(),
        category: Category::Tree,
        time_complexity: TimeComplexity::new("O(log n)", "O(log n)", "O(n)"),
        space_complexity: "O(n)".into(),
        description: "A Binary Search Tree (BST) is a hierarchical data structure where each \
                      node has at most two children. For every node, all values in the left \
                      subtree are smaller, and all values in the right subtree are larger \
                      than the node's value."
            .into(),
        pseudocode: AlgorithmInfo::pseudocode_from(&[
            "Insert(value):",
            "  if root is null:",
            "    root = new Node(value)",
            "  else:",
            "    insertRecursive(root, value)",
            "",
            "Search(value):",
            "  return searchRecursive(root, value)",
            "",
            "Delete(value):",
            "  root = deleteRecursive(root, value)",
        ]),
        stable: None,
    }
}
