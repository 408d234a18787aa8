//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain. All
//! wrappers return `Result<T, String>`; rejected invocations are caught
//! and surfaced to the caller instead of aborting.

mod dialog;
mod project;
mod session;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// Re-export all public items
pub use dialog::*;
pub use project::*;
pub use session::*;

/// Human-readable message from a rejected invocation.
pub(crate) fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    js_sys::Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
