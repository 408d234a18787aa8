//! New Project Form Component
//!
//! Creates a project from a name, a picked directory, and its detected
//! main branch. Picking a directory prefills the name (last path segment)
//! and triggers branch detection; the branch field stays editable.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands::{self, CreateProjectArgs};
use crate::context::AppContext;

#[component]
pub fn NewProjectForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (path, set_path) = signal(String::new());
    let (main_branch, set_main_branch) = signal(String::from("main"));

    let browse = move |_| {
        spawn_local(async move {
            match commands::pick_directory().await {
                Ok(Some(picked)) => {
                    if name.get_untracked().is_empty() {
                        if let Some(last) = picked.rsplit('/').find(|s| !s.is_empty()) {
                            set_name.set(last.to_string());
                        }
                    }
                    set_path.set(picked.clone());
                    match commands::detect_branch(&picked).await {
                        Ok(Some(branch)) => set_main_branch.set(branch),
                        Ok(None) => {}
                        Err(e) => ctx.report_error("Failed to detect branch", &e, Some(picked)),
                    }
                }
                Ok(None) => {}
                Err(e) => ctx.report_error("Failed to pick directory", &e, None),
            }
        });
    };

    let create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get();
        let path_value = path.get();
        let branch_value = main_branch.get();
        if name_value.is_empty() || path_value.is_empty() {
            return;
        }
        spawn_local(async move {
            let args = CreateProjectArgs {
                name: &name_value,
                path: &path_value,
                main_branch: &branch_value,
            };
            match commands::create_project(&args).await {
                Ok(project) => {
                    web_sys::console::log_1(
                        &format!("[TREE] Created project {}", project.name).into(),
                    );
                    set_name.set(String::new());
                    set_path.set(String::new());
                    set_main_branch.set("main".to_string());
                    ctx.reload();
                }
                Err(e) => ctx.report_error("Failed to create project", &e, None),
            }
        });
    };

    view! {
        <form class="new-project-form" on:submit=create>
            <div class="new-project-row">
                <input
                    type="text"
                    placeholder="Project name..."
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_name.set(input.value());
                    }
                />
            </div>
            <div class="new-project-row">
                <input
                    type="text"
                    class="path-input"
                    placeholder="Repository path..."
                    prop:value=move || path.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_path.set(input.value());
                    }
                />
                <button type="button" class="browse-btn" on:click=browse>
                    "Browse..."
                </button>
            </div>
            <div class="new-project-row">
                <input
                    type="text"
                    class="branch-input"
                    placeholder="Main branch"
                    prop:value=move || main_branch.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_main_branch.set(input.value());
                    }
                />
                <button type="submit">"Add Project"</button>
            </div>
        </form>
    }
}
