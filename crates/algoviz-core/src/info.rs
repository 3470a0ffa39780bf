//! Descriptive metadata attached to every registered algorithm.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sorting,
    Tree,
}

/// Big-O strings for the three standard cases.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeComplexity {
    pub best: String,
    pub average: String,
    pub worst: String,
}

impl TimeComplexity {
    pub fn new(best: &str, average: &str, worst: &str) -> Self {
        Self {
            best: best.into(),
            average: average.into(),
            worst: worst.into(),
        }
    }
}

/// Static descriptive record for one algorithm: complexity, prose summary,
/// pseudocode lines for display, and (for sorts) a stability flag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmInfo {
    pub name: String,
    pub category: Category,
    pub time_complexity: TimeComplexity,
    pub space_complexity: String,
    pub description: String,
    pub pseudocode: Vec<String>,
    /// Sorting only; trees have no equivalent concept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stable: Option<bool>,
}

impl AlgorithmInfo {
    pub(crate) fn pseudocode_from(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| (*l).to_string()).collect()
    }
}
