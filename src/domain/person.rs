use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A speaker attached to an event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Person {
    pub id: i64,
    pub event_id: i64,
    pub name: String,
}
