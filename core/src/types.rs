//! Wire types for the todo list endpoint.
//!
//! # Design
//! Field names follow the server's JSON exactly (`Task`, `Done`, ...) through
//! serde renames, so the Rust side keeps snake_case. Timestamps are RFC 3339
//! strings on the wire and normalized to UTC on decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unix seconds of `0001-01-01T00:00:00Z`, which the server sends as
/// `CompletedAt` for items that are not done.
const ZERO_TIME_UNIX: i64 = -62_135_596_800;

/// A single todo entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    #[serde(rename = "Task")]
    pub task: String,
    #[serde(rename = "Done")]
    pub done: bool,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "CompletedAt")]
    pub completed_at: DateTime<Utc>,
}

impl Item {
    /// Completion time, or `None` while `completed_at` holds the zero-time
    /// sentinel.
    pub fn completed_on(&self) -> Option<DateTime<Utc>> {
        (self.completed_at.timestamp() != ZERO_TIME_UNIX).then_some(self.completed_at)
    }
}

/// Envelope returned by `GET /list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListResponse {
    pub results: Vec<Item>,
    pub date: i64,
    pub total_results: i64,
}
