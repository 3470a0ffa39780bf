//! Quick sort: Lomuto partition with the rightmost element as pivot. Ties
//! move into the left partition; not stable.

use crate::info::{AlgorithmInfo, Category, TimeComplexity};
use crate::step::{HighlightKind, Step, StepKind, Trace};

pub fn get_steps(input: &[i64]) -> Vec<Step> {
    let mut trace = Trace::new();
    let mut arr = input.to_vec();

    if arr.len() > 1 {
        let high = arr.len() as isize - 1;
        quick_sort(&mut arr, 0, high, &mut trace);

        trace.record(
            StepKind::Highlight {
                indices: (0..arr.len()).collect(),
                highlight_type: HighlightKind::Sorted,
            },
            "All elements are now sorted".to_string(),
        );
    }

    trace.into_steps()
}

// Signed bounds so the `pivot - 1` recursion can step below zero.
fn quick_sort(arr: &mut [i64], low: isize, high: isize, trace: &mut Trace) {
    if low < high {
        trace.record(
            StepKind::Highlight {
                indices: (low as usize..=high as usize).collect(),
                highlight_type: HighlightKind::Partition,
            },
            format!("Sorting subarray from index {low} to {high}"),
        );

        let pivot_index = partition(arr, low as usize, high as usize, trace) as isize;

        quick_sort(arr, low, pivot_index - 1, trace);
        quick_sort(arr, pivot_index + 1, high, trace);
    }
}

fn partition(arr: &mut [i64], low: usize, high: usize, trace: &mut Trace) -> usize {
    let pivot = arr[high];

    trace.record(
        StepKind::Highlight {
            indices: vec![high],
            highlight_type: HighlightKind::Pivot,
        },
        format!("Selected pivot: {pivot} at index {high}"),
    );

    // Boundary of the <= pivot region; signed so it can start one short of
    // `low` when that is 0.
    let mut i = low as isize - 1;

    for j in low..high {
        trace.record(
            StepKind::Compare {
                indices: [j, high],
                values: [arr[j], pivot],
            },
            format!("Comparing {} at index {j} with pivot {pivot}", arr[j]),
        );

        if arr[j] <= pivot {
            i += 1;
            let i = i as usize;

            if i != j {
                trace.record(
                    StepKind::Swap {
                        indices: [i, j],
                        values: [arr[i], arr[j]],
                    },
                    format!(
                        "Swapping {} at index {i} with {} at index {j} (both ≤ pivot)",
                        arr[i], arr[j]
                    ),
                );
                arr.swap(i, j);
            }

            trace.record(
                StepKind::Highlight {
                    indices: vec![i],
                    highlight_type: HighlightKind::Active,
                },
                format!("Element {} is now in the left partition (≤ pivot)", arr[i]),
            );
        }
    }

    let pivot_slot = (i + 1) as usize;

    if pivot_slot != high {
        trace.record(
            StepKind::Swap {
                indices: [pivot_slot, high],
                values: [arr[pivot_slot], arr[high]],
            },
            format!(
                "Placing pivot {pivot} in its correct position by swapping with element at index {pivot_slot}"
            ),
        );
        arr.swap(pivot_slot, high);
    }

    trace.record(
        StepKind::Highlight {
            indices: vec![pivot_slot],
            highlight_type: HighlightKind::Sorted,
        },
        format!("Pivot {pivot} is now in its final sorted position at index {pivot_slot}"),
    );

    pivot_slot
}

pub fn info() -> AlgorithmInfo {
    AlgorithmInfo {
        name: "Quick Sort".into(),
        category: Category::Sorting,
        time_complexity: TimeComplexity::new("O(n log n)", "O(n log n)", "O(n²)"),
        space_complexity: "O(log n)".into(),
        description: "Quick Sort is a divide-and-conquer algorithm that picks a 'pivot' \
                      element and partitions the array around it, placing smaller elements \
                      before the pivot and larger elements after it. It then recursively \
                      sorts the sub-arrays."
            .into(),
        pseudocode: AlgorithmInfo::pseudocode_from(&[
            "function quickSort(arr, low, high):",
            "  if low < high:",
            "    pivotIndex = partition(arr, low, high)",
            "    quickSort(arr, low, pivotIndex - 1)",
            "    quickSort(arr, pivotIndex + 1, high)",
            "",
            "function partition(arr, low, high):",
            "  pivot = arr[high]",
            "  i = low - 1",
            "  for j = low to high - 1:",
            "    if arr[j] <= pivot:",
            "      i++",
            "      swap arr[i] and arr[j]",
            "  swap arr[i + 1] and arr[high]",
            "  return i + 1",
        ]),
        stable: Some(false),
    }
}
