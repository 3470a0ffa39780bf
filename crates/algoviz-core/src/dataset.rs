//! Preset demonstration datasets and input parsing.
//!
//! The generators themselves are infallible; parsing caller-supplied text or
//! JSON into an integer dataset is the one fallible surface and carries a
//! proper error type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named input sequence for demonstrations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub values: Vec<i64>,
}

impl Dataset {
    fn new(name: &str, values: &[i64]) -> Self {
        Self {
            name: name.into(),
            values: values.to_vec(),
        }
    }
}

/// Errors produced while turning user input into a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset parse error: {0}")]
    Json(String),
    #[error("dataset contains no values")]
    Empty,
    #[error("invalid value '{0}': expected an integer")]
    InvalidValue(String),
}

/// Fixed demonstration inputs for the sorting generators. Preset keys are
/// part of the external surface consumed by the UI layer.
pub fn sorting_presets() -> Vec<Dataset> {
    vec![
        Dataset::new("small", &[64, 34, 25, 12, 22, 11, 90]),
        Dataset::new("medium", &[64, 34, 25, 12, 22, 11, 90, 5, 77, 30, 45, 88]),
        Dataset::new(
            "large",
            &[53, 8, 91, 27, 64, 12, 78, 39, 85, 3, 70, 46, 19, 99, 31, 57, 6, 74, 42, 88],
        ),
        Dataset::new(
            "reversed",
            &[
                20, 19, 18, 17, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1,
            ],
        ),
        Dataset::new("nearlySorted", &[1, 2, 3, 4, 5, 7, 6, 8, 9, 10, 11, 12]),
        Dataset::new("duplicates", &[5, 2, 8, 2, 9, 1, 5, 5, 2, 8]),
    ]
}

/// Fixed demonstration inputs for the tree generators, including the
/// AVL-specific shapes (left-heavy, right-heavy, rotation-triggering).
pub fn tree_presets() -> Vec<Dataset> {
    vec![
        Dataset::new("small", &[50, 30, 70, 20, 40, 60, 80]),
        Dataset::new("medium", &[50, 30, 70, 20, 40, 60, 80, 10, 25, 35, 45]),
        Dataset::new(
            "large",
            &[50, 30, 70, 20, 40, 60, 80, 10, 25, 35, 45, 55, 65, 75, 85],
        ),
        Dataset::new("unbalanced", &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]),
        Dataset::new("bstBalanced", &[50, 25, 75, 12, 37, 62, 87, 6, 18, 31, 43]),
        Dataset::new("duplicateTest", &[5, 3, 7, 3, 8, 1, 9]),
        Dataset::new("simple", &[10, 20, 30, 40, 50, 25]),
        Dataset::new("leftHeavy", &[50, 40, 30, 20, 10]),
        Dataset::new("rightHeavy", &[10, 20, 30, 40, 50]),
        Dataset::new("balanced", &[25, 15, 35, 10, 20, 30, 40]),
        Dataset::new(
            "complex",
            &[10, 5, 15, 2, 7, 12, 20, 1, 3, 6, 8, 11, 13, 17, 25],
        ),
    ]
}

/// Parse comma- or whitespace-separated integers, e.g. `"5, 2, 8"`.
pub fn parse_values_text(input: &str) -> Result<Vec<i64>, DatasetError> {
    let mut values = Vec::new();
    for token in input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        let value = token
            .parse::<i64>()
            .map_err(|_| DatasetError::InvalidValue(token.to_string()))?;
        values.push(value);
    }
    if values.is_empty() {
        return Err(DatasetError::Empty);
    }
    Ok(values)
}

/// Parse a dataset document: `{"name": "...", "values": [...]}`.
pub fn parse_dataset_json(input: &str) -> Result<Dataset, DatasetError> {
    let dataset: Dataset =
        serde_json::from_str(input).map_err(|e| DatasetError::Json(e.to_string()))?;
    if dataset.values.is_empty() {
        return Err(DatasetError::Empty);
    }
    Ok(dataset)
}
