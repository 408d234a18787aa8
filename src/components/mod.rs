//! UI Components
//!
//! Reusable Leptos components.

mod confirm_dialog;
mod error_toast;
mod message_view;
mod new_project_form;
mod new_session_form;
mod project_row;
mod project_tree;
mod session_row;

pub use confirm_dialog::ConfirmDialog;
pub use error_toast::ErrorToasts;
pub use message_view::MessageView;
pub use new_project_form::NewProjectForm;
pub use new_session_form::NewSessionForm;
pub use project_row::ProjectRow;
pub use project_tree::ProjectTree;
pub use session_row::SessionRow;
