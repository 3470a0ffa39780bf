//! Tree step generators: plain BST and self-balancing AVL.

pub mod avl;
pub mod bst;
pub mod node;

use serde::{Deserialize, Serialize};

use crate::step::Step;
pub use avl::Avl;
pub use bst::Bst;
pub use node::TreeNode;

/// Result of a structural tree operation: the trace plus the tree that
/// accumulates across calls. `root` is `None` when the last node was removed
/// (or nothing was ever inserted).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeUpdate {
    pub steps: Vec<Step>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<TreeNode>,
}
