//! Merge sort: divide-and-conquer. Comparisons favor the left half on ties
//! (`<=`), preserving stability; merge steps carry source indices in the
//! original array coordinate space.

use crate::info::{AlgorithmInfo, Category, TimeComplexity};
use crate::step::{HighlightKind, Step, StepKind, Trace};

pub fn get_steps(input: &[i64]) -> Vec<Step> {
    let mut trace = Trace::new();
    let mut arr = input.to_vec();

    if arr.len() > 1 {
        let right = arr.len() - 1;
        merge_sort(&mut arr, 0, right, &mut trace);
    }

    trace.into_steps()
}

fn merge_sort(arr: &mut [i64], left: usize, right: usize, trace: &mut Trace) {
    if left >= right {
        return;
    }

    let mid = (left + right) / 2;

    trace.record(
        StepKind::Highlight {
            indices: (left..=right).collect(),
            highlight_type: HighlightKind::Partition,
        },
        format!("Dividing array from index {left} to {right} at midpoint {mid}"),
    );

    merge_sort(arr, left, mid, trace);
    merge_sort(arr, mid + 1, right, trace);
    merge(arr, left, mid, right, trace);
}

fn merge(arr: &mut [i64], left: usize, mid: usize, right: usize, trace: &mut Trace) {
    let left_arr: Vec<i64> = arr[left..=mid].to_vec();
    let right_arr: Vec<i64> = arr[mid + 1..=right].to_vec();

    trace.record(
        StepKind::Highlight {
            indices: (left..=right).collect(),
            highlight_type: HighlightKind::Merge,
        },
        format!(
            "Merging left subarray {left_arr:?} with right subarray {right_arr:?}"
        ),
    );

    let mut i = 0;
    let mut j = 0;
    let mut k = left;

    while i < left_arr.len() && j < right_arr.len() {
        trace.record(
            StepKind::Compare {
                indices: [left + i, mid + 1 + j],
                values: [left_arr[i], right_arr[j]],
            },
            format!(
                "Comparing {} from left array with {} from right array",
                left_arr[i], right_arr[j]
            ),
        );

        if left_arr[i] <= right_arr[j] {
            trace.record(
                StepKind::Merge {
                    source_indices: vec![left + i],
                    target_index: k,
                    values: vec![left_arr[i]],
                },
                format!("Placing {} at position {k}", left_arr[i]),
            );
            arr[k] = left_arr[i];
            i += 1;
        } else {
            trace.record(
                StepKind::Merge {
                    source_indices: vec![mid + 1 + j],
                    target_index: k,
                    values: vec![right_arr[j]],
                },
                format!("Placing {} at position {k}", right_arr[j]),
            );
            arr[k] = right_arr[j];
            j += 1;
        }
        k += 1;
    }

    while i < left_arr.len() {
        trace.record(
            StepKind::Merge {
                source_indices: vec![left + i],
                target_index: k,
                values: vec![left_arr[i]],
            },
            format!("Placing remaining element {} at position {k}", left_arr[i]),
        );
        arr[k] = left_arr[i];
        i += 1;
        k += 1;
    }

    while j < right_arr.len() {
        trace.record(
            StepKind::Merge {
                source_indices: vec![mid + 1 + j],
                target_index: k,
                values: vec![right_arr[j]],
            },
            format!("Placing remaining element {} at position {k}", right_arr[j]),
        );
        arr[k] = right_arr[j];
        j += 1;
        k += 1;
    }

    trace.record(
        StepKind::Highlight {
            indices: (left..=right).collect(),
            highlight_type: HighlightKind::Sorted,
        },
        format!("Subarray from {left} to {right} is now merged and sorted"),
    );
}

pub fn info() -> AlgorithmInfo {
    AlgorithmInfo {
        name: "Merge Sort".into(),
        category: Category::Sorting,
        time_complexity: TimeComplexity::new("O(n log n)", "O(n log n)", "O(n log n)"),
        space_complexity: "O(n)".into(),
        description: "Merge Sort is a divide-and-conquer algorithm that divides the input \
                      array into two halves, recursively sorts them, and then merges the two \
                      sorted halves. It guarantees O(n log n) time complexity in all cases."
            .into(),
        pseudocode: AlgorithmInfo::pseudocode_from(&[
            "function mergeSort(arr, left, right):",
            "  if left < right:",
            "    mid = (left + right) / 2",
            "    mergeSort(arr, left, mid)",
            "    mergeSort(arr, mid+1, right)",
            "    merge(arr, left, mid, right)",
        ]),
        stable: Some(true),
    }
}
