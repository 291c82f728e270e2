//! Wire models for the actions API.
//!
//! Shapes follow the server's JSON exactly:
//! - `GET /GetActions` returns `{count, actions: [{id, name, group, enabled,
//!   subactions_count}, ...]}`.
//! - `POST /DoAction` takes `{"action": {"id": "..."}}`.

use serde::{Deserialize, Serialize};

/// One server-side action as listed by the catalog endpoint.
///
/// The `id` is opaque and server-assigned; everything beyond `id` and `name`
/// is display-only metadata.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ActionDescriptor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub subactions_count: i64,
}

/// The full list of actions retrieved in one fetch.
///
/// Never cached: each Add operation fetches a fresh catalog and discards it
/// when the operation completes.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionCatalog {
    pub count: i64,
    pub actions: Vec<ActionDescriptor>,
}

/// Request body for the execution endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct DoActionRequest<'a> {
    pub action: ActionRef<'a>,
}

/// Reference to an action by id.
#[derive(Debug, Serialize)]
pub(crate) struct ActionRef<'a> {
    pub id: &'a str,
}
