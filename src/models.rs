//! Frontend Models
//!
//! Data structures mirroring backend entities. Sessions are owned by the
//! backend; this layer mirrors them via commands and push events.

use serde::{Deserialize, Serialize};

/// Project data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub path: String,
    pub main_branch: String,
    pub display_order: i32,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

/// Session data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub project_id: Option<u32>,
    pub name: String,
    pub display_order: i32,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Partial session record carried by `session-updated` events.
///
/// Absent fields leave the existing record untouched (shallow merge).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SessionPatch {
    pub id: String,
    #[serde(default)]
    pub project_id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_order: Option<i32>,
    #[serde(default)]
    pub is_favorite: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Session {
    /// Shallow-merge the present patch fields onto this record.
    /// `project_id` changes are not applied here; cross-project moves are
    /// reconciled by a full reload.
    pub fn apply_patch(&mut self, patch: &SessionPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(display_order) = patch.display_order {
            self.display_order = display_order;
        }
        if let Some(is_favorite) = patch.is_favorite {
            self.is_favorite = is_favorite;
        }
        if let Some(status) = &patch.status {
            self.status = Some(status.clone());
        }
        if let Some(created_at) = &patch.created_at {
            self.created_at = Some(created_at.clone());
        }
    }
}

/// A structured log/message record, rendered but never mutated.
///
/// Unknown fields are kept in `extra` so the raw-data inspector can show
/// the complete record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
