//! New Session Form Component
//!
//! Inline form under an expanded project. The created record is not
//! inserted locally; it arrives back through the `session-created` event.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::context::AppContext;

#[component]
pub fn NewSessionForm(project_id: u32, #[prop(into)] on_done: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());

    let create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get();
        if name_value.is_empty() {
            return;
        }
        spawn_local(async move {
            match commands::create_session(project_id, &name_value).await {
                Ok(_) => on_done.run(()),
                Err(e) => ctx.report_error("Failed to create session", &e, None),
            }
        });
    };

    view! {
        <form class="new-session-form" on:submit=create>
            <input
                type="text"
                placeholder="Session name..."
                prop:value=move || name.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_name.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
            <button type="button" class="cancel-btn" on:click=move |_| on_done.run(())>
                "Cancel"
            </button>
        </form>
    }
}
