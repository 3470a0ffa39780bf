use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use algoviz_core::{
    parse_values_text, Registry, TraversalKind, TreeNode, TreeUpdate,
};

#[wasm_bindgen]
pub struct AlgoViz {
    registry: Registry,
    bst_root: Option<TreeNode>,
    avl_root: Option<TreeNode>,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn values_from_js(values: JsValue) -> Result<Vec<i64>, JsError> {
    if jsvalue_is_undefined_or_null(&values) {
        return Err(JsError::new("values is null/undefined"));
    }
    swb::from_value(values).map_err(|e| JsError::new(&format!("values error: {e}")))
}

fn traversal_kind(kind: &str) -> Result<TraversalKind, JsError> {
    match kind {
        "inorder" => Ok(TraversalKind::Inorder),
        "preorder" => Ok(TraversalKind::Preorder),
        "postorder" => Ok(TraversalKind::Postorder),
        other => Err(JsError::new(&format!("unknown traversal '{other}'"))),
    }
}

#[wasm_bindgen]
impl AlgoViz {
    /// Create an engine instance owning one BST and one AVL session.
    #[wasm_bindgen(constructor)]
    pub fn new() -> AlgoViz {
        console_error_panic_hook::set_once();
        AlgoViz {
            registry: Registry::new(),
            bst_root: None,
            avl_root: None,
        }
    }

    /// Registered sorting algorithm identifiers, as a JSON array of strings.
    #[wasm_bindgen(js_name = sorting_ids)]
    pub fn sorting_ids(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.registry.sorting_ids())
            .map_err(|e| JsError::new(&format!("ids error: {e}")))
    }

    /// Registered tree structure identifiers, as a JSON array of strings.
    #[wasm_bindgen(js_name = tree_ids)]
    pub fn tree_ids(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.registry.tree_ids())
            .map_err(|e| JsError::new(&format!("ids error: {e}")))
    }

    /// Metadata for any registered algorithm id (sorting or tree).
    #[wasm_bindgen(js_name = algorithm_info)]
    pub fn algorithm_info(&self, id: String) -> Result<JsValue, JsError> {
        let info = self
            .registry
            .info(&id)
            .ok_or_else(|| JsError::new(&format!("unknown algorithm '{id}'")))?;
        swb::to_value(&info).map_err(|e| JsError::new(&format!("info error: {e}")))
    }

    /// Run a sorting generator. `values` is a JSON array of integers; the
    /// return value is the full step trace.
    #[wasm_bindgen(js_name = sorting_steps)]
    pub fn sorting_steps(&self, id: String, values: JsValue) -> Result<JsValue, JsError> {
        let input = values_from_js(values)?;
        let steps = self
            .registry
            .sorting_steps(&id, &input)
            .ok_or_else(|| JsError::new(&format!("unknown sorting algorithm '{id}'")))?;
        swb::to_value(&steps).map_err(|e| JsError::new(&format!("steps error: {e}")))
    }

    /// Parse `"5, 2, 8"`-style text into a JSON array of integers.
    #[wasm_bindgen(js_name = parse_values)]
    pub fn parse_values(&self, text: String) -> Result<JsValue, JsError> {
        let values =
            parse_values_text(&text).map_err(|e| JsError::new(&format!("parse error: {e}")))?;
        swb::to_value(&values).map_err(|e| JsError::new(&format!("values error: {e}")))
    }

    /// Preset sorting inputs, as a JSON array of `{name, values}` records.
    #[wasm_bindgen(js_name = sorting_datasets)]
    pub fn sorting_datasets(&self) -> Result<JsValue, JsError> {
        swb::to_value(&algoviz_core::dataset::sorting_presets())
            .map_err(|e| JsError::new(&format!("datasets error: {e}")))
    }

    /// Preset tree inputs, as a JSON array of `{name, values}` records.
    #[wasm_bindgen(js_name = tree_datasets)]
    pub fn tree_datasets(&self) -> Result<JsValue, JsError> {
        swb::to_value(&algoviz_core::dataset::tree_presets())
            .map_err(|e| JsError::new(&format!("datasets error: {e}")))
    }

    /// Insert values into the session BST. Returns `{steps, root}`.
    #[wasm_bindgen(js_name = bst_insert)]
    pub fn bst_insert(&mut self, values: JsValue) -> Result<JsValue, JsError> {
        let input = values_from_js(values)?;
        let update = self.registry.bst_mut().insert(&input, self.bst_root.take());
        self.finish_bst(update)
    }

    /// Delete one value from the session BST. Returns `{steps, root}`.
    #[wasm_bindgen(js_name = bst_delete)]
    pub fn bst_delete(&mut self, value: i32) -> Result<JsValue, JsError> {
        let root = self
            .bst_root
            .take()
            .ok_or_else(|| JsError::new("tree is empty"))?;
        let update = self.registry.bst_mut().delete(i64::from(value), root);
        self.finish_bst(update)
    }

    /// Search the session BST. Returns the step trace only; the tree does not
    /// change.
    #[wasm_bindgen(js_name = bst_search)]
    pub fn bst_search(&self, value: i32) -> Result<JsValue, JsError> {
        let root = self
            .bst_root
            .as_ref()
            .ok_or_else(|| JsError::new("tree is empty"))?;
        let steps = self.registry.bst().search(i64::from(value), root);
        swb::to_value(&steps).map_err(|e| JsError::new(&format!("steps error: {e}")))
    }

    /// Traverse the session BST. `kind` is `inorder`, `preorder` or
    /// `postorder`.
    #[wasm_bindgen(js_name = bst_traversal)]
    pub fn bst_traversal(&self, kind: String) -> Result<JsValue, JsError> {
        let root = self
            .bst_root
            .as_ref()
            .ok_or_else(|| JsError::new("tree is empty"))?;
        let steps = self.registry.bst().traversal(root, traversal_kind(&kind)?);
        swb::to_value(&steps).map_err(|e| JsError::new(&format!("steps error: {e}")))
    }

    /// Current session BST root with layout coordinates, or null when empty.
    #[wasm_bindgen(js_name = bst_tree)]
    pub fn bst_tree(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.bst_root).map_err(|e| JsError::new(&format!("tree error: {e}")))
    }

    /// Insert values into the session AVL tree. Returns `{steps, root}`.
    #[wasm_bindgen(js_name = avl_insert)]
    pub fn avl_insert(&mut self, values: JsValue) -> Result<JsValue, JsError> {
        let input = values_from_js(values)?;
        let update = self.registry.avl_mut().insert(&input, self.avl_root.take());
        self.avl_root = update.root.clone();
        swb::to_value(&update).map_err(|e| JsError::new(&format!("update error: {e}")))
    }

    /// Replace the session AVL tree with a balanced tree built from `values`.
    /// Returns the new root (no steps are emitted).
    #[wasm_bindgen(js_name = avl_create_balanced)]
    pub fn avl_create_balanced(&mut self, values: JsValue) -> Result<JsValue, JsError> {
        let input = values_from_js(values)?;
        self.avl_root = self.registry.avl_mut().create_balanced(&input);
        swb::to_value(&self.avl_root).map_err(|e| JsError::new(&format!("tree error: {e}")))
    }

    /// Current session AVL root, or null when empty.
    #[wasm_bindgen(js_name = avl_tree)]
    pub fn avl_tree(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.avl_root).map_err(|e| JsError::new(&format!("tree error: {e}")))
    }

    /// Drop both session trees. Node-id counters keep advancing, so ids are
    /// never reused within the session.
    #[wasm_bindgen(js_name = reset_trees)]
    pub fn reset_trees(&mut self) {
        self.bst_root = None;
        self.avl_root = None;
    }

    fn finish_bst(&mut self, update: TreeUpdate) -> Result<JsValue, JsError> {
        self.bst_root = update.root.clone();
        swb::to_value(&update).map_err(|e| JsError::new(&format!("update error: {e}")))
    }
}

impl Default for AlgoViz {
    fn default() -> Self {
        Self::new()
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
