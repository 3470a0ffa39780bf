//! Identifiers and simple allocators for steps and tree nodes.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Position of a step within one generator run. Serialized as the string
/// `step-<n>`; consumers rely on `steps[i].id == "step-" + i`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct StepId(pub u32);

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step-{}", self.0)
    }
}

impl Serialize for StepId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StepId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let n = s
            .strip_prefix("step-")
            .and_then(|rest| rest.parse::<u32>().ok())
            .ok_or_else(|| D::Error::custom(format!("invalid step id '{s}'")))?;
        Ok(StepId(n))
    }
}

/// Identity of a tree node, minted by a [`NodeIdGen`] as `<prefix>-<n>`.
/// The empty id is the "no node" marker carried by not-found search steps.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn none() -> Self {
        NodeId(String::new())
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Monotonic allocator for node ids. Each tree session owns its own
/// allocator, so ids never repeat within one tree; the prefix keeps BST and
/// AVL id namespaces disjoint.
#[derive(Debug)]
pub struct NodeIdGen {
    prefix: &'static str,
    next: u32,
}

impl NodeIdGen {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix, next: 0 }
    }

    #[inline]
    pub fn mint(&mut self) -> NodeId {
        let id = NodeId(format!("{}-{}", self.prefix, self.next));
        self.next = self.next.wrapping_add(1);
        id
    }
}
