//! Project Command Wrappers

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{invoke, js_error_to_string};
use crate::models::Project;

#[derive(Serialize)]
pub struct CreateProjectArgs<'a> {
    pub name: &'a str,
    pub path: &'a str,
    #[serde(rename = "mainBranch")]
    pub main_branch: &'a str,
}

#[derive(Serialize)]
struct PathArgs<'a> {
    path: &'a str,
}

/// One entry of a full project ranking.
#[derive(Serialize)]
pub struct ProjectOrder {
    pub id: u32,
    #[serde(rename = "displayOrder")]
    pub display_order: i32,
}

#[derive(Serialize)]
struct ReorderProjectsArgs<'a> {
    orders: &'a [ProjectOrder],
}

/// Fetch all projects with their nested sessions.
pub async fn list_projects_with_sessions() -> Result<Vec<Project>, String> {
    let result = invoke("list_projects_with_sessions", JsValue::NULL)
        .await
        .map_err(js_error_to_string)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_project(args: &CreateProjectArgs<'_>) -> Result<Project, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("create_project", js_args)
        .await
        .map_err(js_error_to_string)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Detect the checked-out branch for a filesystem path.
pub async fn detect_branch(path: &str) -> Result<Option<String>, String> {
    let js_args = serde_wasm_bindgen::to_value(&PathArgs { path }).map_err(|e| e.to_string())?;
    let result = invoke("detect_branch", js_args)
        .await
        .map_err(js_error_to_string)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Persist a full project ranking by identifier+position.
pub async fn reorder_projects(orders: &[ProjectOrder]) -> Result<(), String> {
    let js_args =
        serde_wasm_bindgen::to_value(&ReorderProjectsArgs { orders }).map_err(|e| e.to_string())?;
    invoke("reorder_projects", js_args)
        .await
        .map_err(js_error_to_string)?;
    Ok(())
}
