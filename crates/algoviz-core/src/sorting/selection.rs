//! Selection sort: leftmost strict minimum per pass. Deterministic on ties
//! but not stable (long-range swaps can reorder equal values).

use crate::info::{AlgorithmInfo, Category, TimeComplexity};
use crate::step::{HighlightKind, Step, StepKind, Trace};

pub fn get_steps(input: &[i64]) -> Vec<Step> {
    let mut trace = Trace::new();
    let mut arr = input.to_vec();
    let n = arr.len();

    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;

        trace.record(
            StepKind::Highlight {
                indices: vec![i],
                highlight_type: HighlightKind::Active,
            },
            format!("Finding minimum element for position {i}"),
        );

        for j in i + 1..n {
            trace.record(
                StepKind::Compare {
                    indices: [j, min_index],
                    values: [arr[j], arr[min_index]],
                },
                format!(
                    "Comparing {} at index {j} with current minimum {} at index {min_index}",
                    arr[j], arr[min_index]
                ),
            );

            if arr[j] < arr[min_index] {
                min_index = j;

                trace.record(
                    StepKind::Highlight {
                        indices: vec![min_index],
                        highlight_type: HighlightKind::Pivot,
                    },
                    format!("New minimum found: {} at index {min_index}", arr[min_index]),
                );
            }
        }

        if min_index != i {
            trace.record(
                StepKind::Swap {
                    indices: [i, min_index],
                    values: [arr[i], arr[min_index]],
                },
                format!(
                    "Swapping minimum element {} at index {min_index} with element {} at index {i}",
                    arr[min_index], arr[i]
                ),
            );
            arr.swap(i, min_index);
        }

        trace.record(
            StepKind::Highlight {
                indices: vec![i],
                highlight_type: HighlightKind::Sorted,
            },
            format!("Element at index {i} is now in its final sorted position"),
        );
    }

    if n > 1 {
        trace.record(
            StepKind::Highlight {
                indices: vec![n - 1],
                highlight_type: HighlightKind::Sorted,
            },
            "All elements are now sorted".to_string(),
        );
    }

    trace.into_steps()
}

pub fn info() -> AlgorithmInfo {
    AlgorithmInfo {
        name: "Selection Sort".into(),
        category: Category::Sorting,
        time_complexity: TimeComplexity::new("O(n²)", "O(n²)", "O(n²)"),
        space_complexity: "O(1)".into(),
        description: "Selection Sort divides the input list into two parts: a sorted portion \
                      at the left end and an unsorted portion at the right end. It repeatedly \
                      selects the smallest element from the unsorted portion and moves it to \
                      the end of the sorted portion."
            .into(),
        pseudocode: AlgorithmInfo::pseudocode_from(&[
            "for i = 0 to n-2:",
            "  minIndex = i",
            "  for j = i+1 to n-1:",
            "    if arr[j] < arr[minIndex]:",
            "      minIndex = j",
            "  swap arr[i] and arr[minIndex]",
        ]),
        stable: Some(false),
    }
}
