//! Tauri Event Subscriptions
//!
//! Frontend bindings to the backend notification channel. Each
//! subscription holds the unlisten handle returned by the event API and
//! the handler closure keeping the callback alive; dropping it (or calling
//! [`Subscription::unlisten`]) removes the listener, so components tear
//! down on cleanup without leaking stale callbacks.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub const SESSION_CREATED: &str = "session-created";
pub const SESSION_UPDATED: &str = "session-updated";
pub const SESSION_DELETED: &str = "session-deleted";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "event"])]
    async fn listen(event: &str, handler: &JsValue) -> Result<JsValue, JsValue>;
}

/// A live event subscription. Unlistens on drop.
pub struct Subscription {
    unlisten: js_sys::Function,
    _handler: Closure<dyn FnMut(JsValue)>,
}

impl Subscription {
    pub fn unlisten(&self) {
        let _ = self.unlisten.call0(&JsValue::NULL);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unlisten();
    }
}

/// Subscribe to a backend event, deserializing each payload into `T`.
/// Malformed payloads are dropped with a console warning instead of
/// reaching the handler.
pub async fn subscribe<T, F>(event: &'static str, on_event: F) -> Result<Subscription, String>
where
    T: for<'de> serde::Deserialize<'de> + 'static,
    F: Fn(T) + 'static,
{
    let handler = Closure::<dyn FnMut(JsValue)>::new(move |raw: JsValue| {
        let payload = js_sys::Reflect::get(&raw, &JsValue::from_str("payload"))
            .unwrap_or(JsValue::UNDEFINED);
        match serde_wasm_bindgen::from_value::<T>(payload) {
            Ok(value) => on_event(value),
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("[SYNC] Dropped malformed {} payload: {}", event, e).into(),
                );
            }
        }
    });

    let result = listen(event, handler.as_ref())
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| format!("{:?}", e)))?;
    let unlisten = result
        .dyn_into::<js_sys::Function>()
        .map_err(|_| format!("listen({}) returned no unlisten handle", event))?;

    Ok(Subscription {
        unlisten,
        _handler: handler,
    })
}
