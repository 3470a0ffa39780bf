//! Heap sort: bottom-up max-heap build, then repeated root extraction with
//! re-heapification of the shrinking prefix. Not stable.

use crate::info::{AlgorithmInfo, Category, TimeComplexity};
use crate::step::{HighlightKind, Step, StepKind, Trace};

pub fn get_steps(input: &[i64]) -> Vec<Step> {
    let mut trace = Trace::new();
    let mut arr = input.to_vec();
    let n = arr.len();

    if n == 0 {
        return trace.into_steps();
    }

    trace.record(
        StepKind::Highlight {
            indices: (0..n).collect(),
            highlight_type: HighlightKind::Partition,
        },
        "Building max heap from the array".to_string(),
    );

    for i in (0..n / 2).rev() {
        heapify(&mut arr, n, i, &mut trace);
    }

    trace.record(
        StepKind::Highlight {
            indices: (0..n).collect(),
            highlight_type: HighlightKind::Merge,
        },
        "Max heap has been built. Root contains the maximum element.".to_string(),
    );

    for i in (1..n).rev() {
        trace.record(
            StepKind::Swap {
                indices: [0, i],
                values: [arr[0], arr[i]],
            },
            format!(
                "Extracting maximum element {} from heap root and placing it at index {i}",
                arr[0]
            ),
        );
        arr.swap(0, i);

        trace.record(
            StepKind::Highlight {
                indices: vec![i],
                highlight_type: HighlightKind::Sorted,
            },
            format!("Element {} is now in its final sorted position", arr[i]),
        );

        trace.record(
            StepKind::Highlight {
                indices: (0..i).collect(),
                highlight_type: HighlightKind::Active,
            },
            format!("Heapifying reduced heap of size {i}"),
        );

        heapify(&mut arr, i, 0, &mut trace);
    }

    trace.record(
        StepKind::Highlight {
            indices: vec![0],
            highlight_type: HighlightKind::Sorted,
        },
        "All elements are now sorted".to_string(),
    );

    trace.into_steps()
}

/// Sift the value at `i` down within the first `n` slots, comparing both
/// children against the current largest and recursing into the disturbed
/// subtree after a swap.
fn heapify(arr: &mut [i64], n: usize, i: usize, trace: &mut Trace) {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    trace.record(
        StepKind::Highlight {
            indices: vec![i],
            highlight_type: HighlightKind::Active,
        },
        format!("Heapifying subtree rooted at index {i} (value: {})", arr[i]),
    );

    if left < n {
        trace.record(
            StepKind::Compare {
                indices: [left, largest],
                values: [arr[left], arr[largest]],
            },
            format!(
                "Comparing left child {} at index {left} with current largest {} at index {largest}",
                arr[left], arr[largest]
            ),
        );

        if arr[left] > arr[largest] {
            largest = left;

            trace.record(
                StepKind::Highlight {
                    indices: vec![largest],
                    highlight_type: HighlightKind::Pivot,
                },
                format!("Left child {} is now the largest", arr[largest]),
            );
        }
    }

    if right < n {
        trace.record(
            StepKind::Compare {
                indices: [right, largest],
                values: [arr[right], arr[largest]],
            },
            format!(
                "Comparing right child {} at index {right} with current largest {} at index {largest}",
                arr[right], arr[largest]
            ),
        );

        if arr[right] > arr[largest] {
            largest = right;

            trace.record(
                StepKind::Highlight {
                    indices: vec![largest],
                    highlight_type: HighlightKind::Pivot,
                },
                format!("Right child {} is now the largest", arr[largest]),
            );
        }
    }

    if largest != i {
        trace.record(
            StepKind::Swap {
                indices: [i, largest],
                values: [arr[i], arr[largest]],
            },
            format!(
                "Swapping {} at index {i} with {} at index {largest} to maintain heap property",
                arr[i], arr[largest]
            ),
        );
        arr.swap(i, largest);

        heapify(arr, n, largest, trace);
    }
}

pub fn info() -> AlgorithmInfo {
    AlgorithmInfo {
        name: "Heap Sort".into(),
        category: Category::Sorting,
        time_complexity: TimeComplexity::new("O(n log n)", "O(n log n)", "O(n log n)"),
        space_complexity: "O(1)".into(),
        description: "Heap Sort works by building a max heap from the input data, then \
                      repeatedly extracting the maximum element from the heap and placing it \
                      at the end of the sorted portion. It uses the heap data structure to \
                      efficiently find and remove the maximum element."
            .into(),
        pseudocode: AlgorithmInfo::pseudocode_from(&[
            "function heapSort(arr):",
            "  buildMaxHeap(arr)",
            "  for i = n-1 down to 1:",
            "    swap arr[0] and arr[i]",
            "    heapify(arr, i, 0)",
            "",
            "function heapify(arr, n, i):",
            "  largest = i",
            "  left = 2*i + 1",
            "  right = 2*i + 2",
            "  if left < n and arr[left] > arr[largest]:",
            "    largest = left",
            "  if right < n and arr[right] > arr[largest]:",
            "    largest = right",
            "  if largest != i:",
            "    swap arr[i] and arr[largest]",
            "    heapify(arr, n, largest)",
        ]),
        stable: Some(false),
    }
}
