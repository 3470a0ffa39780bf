//! Insertion sort: shifts expressed as overwrite steps. Shift condition is a
//! strict `>`, so equal values keep their relative order (stable).

use crate::info::{AlgorithmInfo, Category, TimeComplexity};
use crate::step::{HighlightKind, Step, StepKind, Trace};

pub fn get_steps(input: &[i64]) -> Vec<Step> {
    let mut trace = Trace::new();
    let mut arr = input.to_vec();
    let n = arr.len();

    if n > 0 {
        trace.record(
            StepKind::Highlight {
                indices: vec![0],
                highlight_type: HighlightKind::Sorted,
            },
            "First element is considered sorted".to_string(),
        );
    }

    for i in 1..n {
        let key = arr[i];

        trace.record(
            StepKind::Highlight {
                indices: vec![i],
                highlight_type: HighlightKind::Active,
            },
            format!("Inserting element {key} from index {i} into sorted portion"),
        );

        // Shift greater elements one slot right until key's position opens.
        let mut j = i;
        while j > 0 {
            trace.record(
                StepKind::Compare {
                    indices: [j - 1, i],
                    values: [arr[j - 1], key],
                },
                format!("Comparing {key} with {} at index {}", arr[j - 1], j - 1),
            );

            if arr[j - 1] <= key {
                break;
            }

            trace.record(
                StepKind::Overwrite {
                    index: j,
                    old_value: arr[j],
                    new_value: arr[j - 1],
                },
                format!("Moving {} from index {} to index {j}", arr[j - 1], j - 1),
            );

            arr[j] = arr[j - 1];
            j -= 1;
        }

        if j != i {
            trace.record(
                StepKind::Overwrite {
                    index: j,
                    old_value: arr[j],
                    new_value: key,
                },
                format!("Inserting {key} at its correct position (index {j})"),
            );
        }

        arr[j] = key;

        trace.record(
            StepKind::Highlight {
                indices: (0..=i).collect(),
                highlight_type: HighlightKind::Sorted,
            },
            format!("Elements from index 0 to {i} are now sorted"),
        );
    }

    trace.into_steps()
}

pub fn info() -> AlgorithmInfo {
    AlgorithmInfo {
        name: "Insertion Sort".into(),
        category: Category::Sorting,
        time_complexity: TimeComplexity::new("O(n)", "O(n²)", "O(n²)"),
        space_complexity: "O(1)".into(),
        description: "Insertion Sort builds the final sorted array one item at a time. It \
                      works by taking elements from the unsorted portion and inserting them \
                      into their correct position in the sorted portion."
            .into(),
        pseudocode: AlgorithmInfo::pseudocode_from(&[
            "for i = 1 to n-1:",
            "  key = arr[i]",
            "  j = i - 1",
            "  while j >= 0 and arr[j] > key:",
            "    arr[j+1] = arr[j]",
            "    j = j - 1",
            "  arr[j+1] = key",
        ]),
        stable: Some(true),
    }
}
