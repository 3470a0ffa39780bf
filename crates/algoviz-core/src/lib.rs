//! algoviz-core (engine-agnostic)
//!
//! Step-trace generators for classic sorting and binary-tree algorithms.
//! Each generator runs to completion synchronously over a private copy of its
//! input and returns a fully materialized, randomly-indexable trace of typed
//! step records; the consuming layer walks the trace index-by-index to drive
//! animation. No I/O, no timers, no shared state between calls.

pub mod dataset;
pub mod ids;
pub mod info;
pub mod playback;
pub mod registry;
pub mod sorting;
pub mod step;
pub mod tree;

// Re-exports for consumers (adapters)
pub use dataset::{parse_dataset_json, parse_values_text, Dataset, DatasetError};
pub use ids::{NodeId, NodeIdGen, StepId};
pub use info::{AlgorithmInfo, Category, TimeComplexity};
pub use playback::Playback;
pub use registry::{Registry, SortingAlgorithm, TreeAlgorithm, TreeOperations};
pub use step::{
    HighlightKind, InsertPosition, RotationKind, Step, StepKind, Trace, TraversalKind,
};
pub use tree::{Avl, Bst, TreeNode, TreeUpdate};
