//! Tree State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the
//! mirrored project tree. Patch helpers wrap the pure logic in
//! `crate::tree` so event handlers stay one-liners.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Project, Session, SessionPatch};
use crate::tree;

/// Mirrored backend tree with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TreeState {
    /// All projects with nested sessions
    pub projects: Vec<Project>,
}

/// Type alias for the store
pub type TreeStore = Store<TreeState>;

// ========================
// Store Helper Functions
// ========================
//
// The derive-generated field accessors are scoped to this module; the
// rest of the crate goes through these helpers.

/// Reactive read of all projects.
pub fn store_projects(store: &TreeStore) -> Vec<Project> {
    store.projects().get()
}

/// Untracked read for event handlers.
pub fn store_projects_untracked(store: &TreeStore) -> Vec<Project> {
    store.projects().get_untracked()
}

/// Replace the whole mirrored tree (initial load / full reload).
pub fn store_set_projects(store: &TreeStore, projects: Vec<Project>) {
    *store.projects().write() = projects;
}

/// Commit an acknowledged project reorder by assigning the new ranks.
/// Ranks are applied per id so session events that arrived while the
/// reorder was in flight are not stomped.
pub fn store_commit_project_order(store: &TreeStore, reordered: &[Project]) {
    let binding = store.projects();
    let mut projects = binding.write();
    for entry in reordered {
        if let Some(project) = projects.iter_mut().find(|p| p.id == entry.id) {
            project.display_order = entry.display_order;
        }
    }
}

/// Commit an acknowledged session reorder within one project.
pub fn store_commit_session_order(store: &TreeStore, project_id: u32, reordered: &[Session]) {
    let binding = store.projects();
    let mut projects = binding.write();
    if let Some(project) = projects.iter_mut().find(|p| p.id == project_id) {
        for entry in reordered {
            if let Some(session) = project.sessions.iter_mut().find(|s| s.id == entry.id) {
                session.display_order = entry.display_order;
            }
        }
    }
}

/// Apply a `session-created` event; returns the owning project id, or
/// `None` when the caller must fall back to a full reload.
pub fn store_apply_session_created(store: &TreeStore, session: Session) -> Option<u32> {
    tree::apply_session_created(&mut store.projects().write(), session)
}

/// Apply a `session-updated` event.
pub fn store_apply_session_updated(store: &TreeStore, patch: &SessionPatch) -> bool {
    tree::apply_session_updated(&mut store.projects().write(), patch)
}

/// Apply a `session-deleted` event.
pub fn store_apply_session_deleted(store: &TreeStore, session_id: &str) -> bool {
    tree::apply_session_deleted(&mut store.projects().write(), session_id)
}
