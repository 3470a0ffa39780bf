//! Algorithm registry: short string identifiers resolved to generator
//! bundles and metadata. The registry also owns the two tree sessions so
//! node-id allocation has a single home per registry instance.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::info::AlgorithmInfo;
use crate::step::Step;
use crate::tree::{Avl, Bst};
use crate::{sorting, tree};

pub type SortingStepFn = fn(&[i64]) -> Vec<Step>;
pub type InfoFn = fn() -> AlgorithmInfo;

/// A registered sorting algorithm: id, display name, generator entry point,
/// metadata.
#[derive(Clone)]
pub struct SortingAlgorithm {
    pub id: &'static str,
    pub name: &'static str,
    pub get_steps: SortingStepFn,
    pub info: InfoFn,
}

/// Which operations a tree kind exposes.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeOperations {
    pub insert: bool,
    pub delete: bool,
    pub search: bool,
    pub traversal: bool,
    pub create_balanced: bool,
}

/// A registered tree structure: id, display name, metadata, operation set.
#[derive(Clone)]
pub struct TreeAlgorithm {
    pub id: &'static str,
    pub name: &'static str,
    pub info: InfoFn,
    pub operations: TreeOperations,
}

/// Lookup table from algorithm identifier to bundle. One registry per
/// consumer; tree node-id state lives in the owned sessions.
pub struct Registry {
    sorting: HashMap<&'static str, SortingAlgorithm>,
    trees: HashMap<&'static str, TreeAlgorithm>,
    bst: Bst,
    avl: Avl,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        let mut sorting = HashMap::new();
        for algo in [
            SortingAlgorithm {
                id: "bubble",
                name: "Bubble Sort",
                get_steps: sorting::bubble::get_steps,
                info: sorting::bubble::info,
            },
            SortingAlgorithm {
                id: "selection",
                name: "Selection Sort",
                get_steps: sorting::selection::get_steps,
                info: sorting::selection::info,
            },
            SortingAlgorithm {
                id: "insertion",
                name: "Insertion Sort",
                get_steps: sorting::insertion::get_steps,
                info: sorting::insertion::info,
            },
            SortingAlgorithm {
                id: "merge",
                name: "Merge Sort",
                get_steps: sorting::merge::get_steps,
                info: sorting::merge::info,
            },
            SortingAlgorithm {
                id: "quick",
                name: "Quick Sort",
                get_steps: sorting::quick::get_steps,
                info: sorting::quick::info,
            },
            SortingAlgorithm {
                id: "heap",
                name: "Heap Sort",
                get_steps: sorting::heap::get_steps,
                info: sorting::heap::info,
            },
        ] {
            sorting.insert(algo.id, algo);
        }

        let mut trees = HashMap::new();
        for algo in [
            TreeAlgorithm {
                id: "bst",
                name: "Binary Search Tree",
                info: tree::bst::info,
                operations: TreeOperations {
                    insert: true,
                    delete: true,
                    search: true,
                    traversal: true,
                    create_balanced: false,
                },
            },
            TreeAlgorithm {
                id: "avl",
                name: "AVL Tree",
                info: tree::avl::info,
                operations: TreeOperations {
                    insert: true,
                    delete: false,
                    search: false,
                    traversal: false,
                    create_balanced: true,
                },
            },
        ] {
            trees.insert(algo.id, algo);
        }

        Self {
            sorting,
            trees,
            bst: Bst::new(),
            avl: Avl::new(),
        }
    }

    pub fn sorting(&self, id: &str) -> Option<&SortingAlgorithm> {
        self.sorting.get(id)
    }

    pub fn tree(&self, id: &str) -> Option<&TreeAlgorithm> {
        self.trees.get(id)
    }

    /// Metadata for any registered algorithm, sorting or tree.
    pub fn info(&self, id: &str) -> Option<AlgorithmInfo> {
        self.sorting
            .get(id)
            .map(|a| (a.info)())
            .or_else(|| self.trees.get(id).map(|a| (a.info)()))
    }

    /// Run a sorting generator by id. `None` for an unknown identifier.
    pub fn sorting_steps(&self, id: &str, values: &[i64]) -> Option<Vec<Step>> {
        self.sorting.get(id).map(|a| (a.get_steps)(values))
    }

    /// Registered sorting identifiers, in stable order.
    pub fn sorting_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.sorting.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Registered tree identifiers, in stable order.
    pub fn tree_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.trees.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn bst(&self) -> &Bst {
        &self.bst
    }

    pub fn bst_mut(&mut self) -> &mut Bst {
        &mut self.bst
    }

    pub fn avl_mut(&mut self) -> &mut Avl {
        &mut self.avl
    }
}
