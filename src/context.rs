//! Application Context
//!
//! Shared state provided via Leptos Context API: the tree reload trigger
//! and the shared error-reporting channel.

use leptos::prelude::*;

/// One surfaced failure, rendered as a dismissable toast.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorNotice {
    pub id: u32,
    pub title: String,
    pub message: String,
    pub detail: Option<String>,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the tree from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the tree from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Surfaced errors - read
    pub errors: ReadSignal<Vec<ErrorNotice>>,
    /// Surfaced errors - write
    set_errors: WriteSignal<Vec<ErrorNotice>>,
    /// Monotonic id for error notices
    next_error_id: StoredValue<u32>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        errors: (ReadSignal<Vec<ErrorNotice>>, WriteSignal<Vec<ErrorNotice>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            errors: errors.0,
            set_errors: errors.1,
            next_error_id: StoredValue::new(0),
        }
    }

    /// Trigger a full reload of the tree
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Surface a failure to the user. Local state is never touched here;
    /// callers keep their last-known-good state.
    pub fn report_error(&self, title: &str, message: &str, detail: Option<String>) {
        let id = self.next_error_id.get_value();
        self.next_error_id.set_value(id + 1);
        web_sys::console::error_1(&format!("[ERROR] {}: {}", title, message).into());
        let notice = ErrorNotice {
            id,
            title: title.to_string(),
            message: message.to_string(),
            detail,
        };
        self.set_errors.update(|errors| errors.push(notice));
    }

    pub fn dismiss_error(&self, id: u32) {
        self.set_errors.update(|errors| errors.retain(|n| n.id != id));
    }
}
