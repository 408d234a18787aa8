//! Dialog Command Wrappers

use wasm_bindgen::prelude::*;

use super::{invoke, js_error_to_string};

/// Request a directory selection from the user. `None` when cancelled.
pub async fn pick_directory() -> Result<Option<String>, String> {
    let result = invoke("pick_directory", JsValue::NULL)
        .await
        .map_err(js_error_to_string)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
