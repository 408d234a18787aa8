//! Confirm Dialog Component
//!
//! Modal confirmation with continue/cancel actions, used by the one-time
//! main-branch warning gate.

use leptos::prelude::*;

/// Modal confirmation dialog. The action proceeds only through
/// `on_confirm`; closing or cancelling runs `on_cancel`.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] confirm_label: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-overlay" on:click=move |_| on_cancel.run(())>
            <div class="dialog-box" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog-title">{title}</div>
                <div class="dialog-message">{message}</div>
                <div class="dialog-actions">
                    <button class="cancel-btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="confirm-btn" on:click=move |_| on_confirm.run(())>
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
