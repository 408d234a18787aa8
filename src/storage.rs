//! Local Persistent Flags
//!
//! localStorage-backed one-time flags keyed by project identifier, used by
//! the first-use warning gate. Storage failures (unavailable storage,
//! quota) degrade to "not shown" rather than raising.

const MAIN_BRANCH_WARNING_PREFIX: &str = "main-branch-warning-";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn warning_key(project_id: u32) -> String {
    format!("{}{}", MAIN_BRANCH_WARNING_PREFIX, project_id)
}

/// Whether the main-branch warning was already shown for this project.
pub fn main_branch_warning_shown(project_id: u32) -> bool {
    local_storage()
        .and_then(|s| s.get_item(&warning_key(project_id)).ok().flatten())
        .is_some()
}

/// Record that the warning was shown; persists for the lifetime of the
/// client storage.
pub fn mark_main_branch_warning_shown(project_id: u32) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(&warning_key(project_id), "1");
    }
}
