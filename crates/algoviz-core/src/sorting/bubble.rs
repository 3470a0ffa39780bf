//! Bubble sort: adjacent passes, strict `>` comparison so equal values never
//! swap (stable).

use crate::info::{AlgorithmInfo, Category, TimeComplexity};
use crate::step::{HighlightKind, Step, StepKind, Trace};

pub fn get_steps(input: &[i64]) -> Vec<Step> {
    let mut trace = Trace::new();
    let mut arr = input.to_vec();
    let n = arr.len();

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            trace.record(
                StepKind::Compare {
                    indices: [j, j + 1],
                    values: [arr[j], arr[j + 1]],
                },
                format!(
                    "Comparing elements at indices {j} and {}: {} vs {}",
                    j + 1,
                    arr[j],
                    arr[j + 1]
                ),
            );

            if arr[j] > arr[j + 1] {
                trace.record(
                    StepKind::Swap {
                        indices: [j, j + 1],
                        values: [arr[j], arr[j + 1]],
                    },
                    format!(
                        "Swapping {} and {} at indices {j} and {}",
                        arr[j],
                        arr[j + 1],
                        j + 1
                    ),
                );
                arr.swap(j, j + 1);
            }
        }

        // Largest remaining value has bubbled to the end of the pass.
        trace.record(
            StepKind::Highlight {
                indices: vec![n - i - 1],
                highlight_type: HighlightKind::Sorted,
            },
            format!(
                "Element at index {} is now in its final sorted position",
                n - i - 1
            ),
        );
    }

    if n > 1 {
        trace.record(
            StepKind::Highlight {
                indices: vec![0],
                highlight_type: HighlightKind::Sorted,
            },
            "All elements are now sorted".to_string(),
        );
    }

    trace.into_steps()
}

pub fn info() -> AlgorithmInfo {
    AlgorithmInfo {
        name: "Bubble Sort".into(),
        category: Category::Sorting,
        time_complexity: TimeComplexity::new("O(n)", "O(n²)", "O(n²)"),
        space_complexity: "O(1)".into(),
        description: "Bubble Sort repeatedly steps through the list, compares adjacent \
                      elements and swaps them if they are in the wrong order. The pass \
                      through the list is repeated until the list is sorted."
            .into(),
        pseudocode: AlgorithmInfo::pseudocode_from(&[
            "for i = 0 to n-2:",
            "  for j = 0 to n-2-i:",
            "    if arr[j] > arr[j+1]:",
            "      swap arr[j] and arr[j+1]",
        ]),
        stable: Some(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_input_produces_no_swaps() {
        let steps = get_steps(&[1, 2, 3]);
        assert!(steps
            .iter()
            .any(|s| matches!(s.kind, StepKind::Compare { .. })));
        assert!(!steps.iter().any(|s| matches!(s.kind, StepKind::Swap { .. })));
        assert!(steps
            .iter()
            .any(|s| matches!(s.kind, StepKind::Highlight { .. })));
    }

    #[test]
    fn degenerate_inputs_do_not_panic() {
        assert!(get_steps(&[]).is_empty());
        assert!(get_steps(&[5]).is_empty());
    }
}
