//! Session Row Component
//!
//! A single session in the tree: status dot, name, favorite star.
//! Draggable for reordering within its owning project.

use leptos::prelude::*;
use leptos_dnd::{
    make_on_dragend, make_on_dragenter, make_on_dragleave, make_on_dragover, make_on_dragstart,
    make_on_drop, DndSignals, DragSource, DropTarget,
};

use crate::models::Session;

#[component]
pub fn SessionRow(
    session: Session,
    project_id: u32,
    dnd: DndSignals,
    #[prop(into)] on_open: Callback<Session>,
    #[prop(into)] on_drop: Callback<(DragSource, DropTarget)>,
) -> impl IntoView {
    let source = DragSource::Session {
        id: session.id.clone(),
        project_id,
    };
    let target = DropTarget::Session {
        id: session.id.clone(),
        project_id,
    };

    let on_dragstart = make_on_dragstart(dnd, source.clone());
    let on_dragenter = make_on_dragenter(dnd, target.clone());
    let on_dragover = make_on_dragover(dnd);
    let on_dragleave = make_on_dragleave(dnd);
    let on_drop_handler = make_on_drop(dnd, move |s, t| on_drop.run((s, t)));
    let on_dragend = make_on_dragend(dnd);

    let row_class = move || {
        let mut c = String::from("session-row");
        if dnd.is_source(&source) {
            c.push_str(" dragging");
        }
        if dnd.is_hover(&target) {
            c.push_str(" drop-target");
        }
        c
    };

    let status_class = match session.status.as_deref() {
        Some(status) => format!("status-dot {}", status),
        None => "status-dot".to_string(),
    };
    let session_for_open = session.clone();

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
            on:click=move |_| on_open.run(session_for_open.clone())
        >
            <span class=status_class></span>
            <span class="session-name">{session.name.clone()}</span>
            {session.is_favorite.then(|| view! { <span class="favorite-star">"★"</span> })}
        </div>
    }
}
