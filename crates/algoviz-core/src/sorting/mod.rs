//! Sorting step generators.
//!
//! Each submodule exposes the same contract: `get_steps(&[i64]) -> Vec<Step>`
//! over a private copy of the input (the caller's slice is never mutated),
//! plus an `info()` metadata record. Empty and singleton inputs yield an
//! empty or minimal trace, never an error.

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;
