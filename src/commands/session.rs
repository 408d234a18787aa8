//! Session Command Wrappers

use serde::Serialize;

use super::{invoke, js_error_to_string};
use crate::models::{Message, Session};

#[derive(Serialize)]
struct ProjectIdArgs {
    #[serde(rename = "projectId")]
    project_id: u32,
}

#[derive(Serialize)]
struct CreateSessionArgs<'a> {
    #[serde(rename = "projectId")]
    project_id: u32,
    name: &'a str,
}

#[derive(Serialize)]
struct SessionIdArgs<'a> {
    #[serde(rename = "sessionId")]
    session_id: &'a str,
}

/// One entry of a full session ranking within a project.
#[derive(Serialize)]
pub struct SessionOrder {
    pub id: String,
    #[serde(rename = "displayOrder")]
    pub display_order: i32,
}

#[derive(Serialize)]
struct ReorderSessionsArgs<'a> {
    #[serde(rename = "projectId")]
    project_id: u32,
    orders: &'a [SessionOrder],
}

/// Fetch or create the project's primary (main-branch) session.
pub async fn get_or_create_main_session(project_id: u32) -> Result<Session, String> {
    let js_args =
        serde_wasm_bindgen::to_value(&ProjectIdArgs { project_id }).map_err(|e| e.to_string())?;
    let result = invoke("get_or_create_main_session", js_args)
        .await
        .map_err(js_error_to_string)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Create a session in a project. The created record arrives back through
/// the `session-created` event; callers do not insert it locally.
pub async fn create_session(project_id: u32, name: &str) -> Result<Session, String> {
    let js_args = serde_wasm_bindgen::to_value(&CreateSessionArgs { project_id, name })
        .map_err(|e| e.to_string())?;
    let result = invoke("create_session", js_args)
        .await
        .map_err(js_error_to_string)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Persist a full session ranking within one project.
pub async fn reorder_sessions(project_id: u32, orders: &[SessionOrder]) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&ReorderSessionsArgs { project_id, orders })
        .map_err(|e| e.to_string())?;
    invoke("reorder_sessions", js_args)
        .await
        .map_err(js_error_to_string)?;
    Ok(())
}

/// Load the message records of a session for the viewer.
pub async fn load_session_messages(session_id: &str) -> Result<Vec<Message>, String> {
    let js_args =
        serde_wasm_bindgen::to_value(&SessionIdArgs { session_id }).map_err(|e| e.to_string())?;
    let result = invoke("load_session_messages", js_args)
        .await
        .map_err(js_error_to_string)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
