use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    pub id: i64,
    pub event_id: i64,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// A row of one of the session association tables (`session_persons`,
/// `session_locations`, `session_tags`): the session plus the attached
/// entity's id.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct SessionLink {
    pub session_id: i64,
    pub linked_id: i64,
}
