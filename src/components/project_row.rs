//! Project Row Component
//!
//! The header row of a project block: collapse toggle, name (click opens
//! the main-branch session), branch badge, new-session action. Draggable
//! for reordering projects.

use leptos::prelude::*;
use leptos_dnd::{
    make_on_dragend, make_on_dragenter, make_on_dragleave, make_on_dragover, make_on_dragstart,
    make_on_drop, DndSignals, DragSource, DropTarget,
};

use crate::models::Project;

#[component]
pub fn ProjectRow(
    project: Project,
    #[prop(into)] expanded: Signal<bool>,
    dnd: DndSignals,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(into)] on_open: Callback<Project>,
    #[prop(into)] on_add_session: Callback<()>,
    #[prop(into)] on_drop: Callback<(DragSource, DropTarget)>,
) -> impl IntoView {
    let source = DragSource::Project { id: project.id };
    let target = DropTarget::Project { id: project.id };

    let on_dragstart = make_on_dragstart(dnd, source.clone());
    let on_dragenter = make_on_dragenter(dnd, target.clone());
    let on_dragover = make_on_dragover(dnd);
    let on_dragleave = make_on_dragleave(dnd);
    let on_drop_handler = make_on_drop(dnd, move |s, t| on_drop.run((s, t)));
    let on_dragend = make_on_dragend(dnd);

    let row_class = move || {
        let mut c = String::from("project-row");
        if dnd.is_source(&source) {
            c.push_str(" dragging");
        }
        if dnd.is_hover(&target) {
            c.push_str(" drop-target");
        }
        c
    };

    let project_for_open = project.clone();

    view! {
        <div
            class=row_class
            draggable="true"
            on:dragstart=on_dragstart
            on:dragenter=on_dragenter
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop_handler
            on:dragend=on_dragend
        >
            <button
                class="collapse-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_toggle.run(());
                }
            >
                {move || if expanded.get() { "▼" } else { "▶" }}
            </button>
            <span
                class="project-name"
                title=project.path.clone()
                on:click=move |_| on_open.run(project_for_open.clone())
            >
                {project.name.clone()}
            </span>
            <span class="branch-badge">{project.main_branch.clone()}</span>
            <button
                class="add-session-btn"
                title="New session"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_add_session.run(());
                }
            >
                "+"
            </button>
        </div>
    }
}
