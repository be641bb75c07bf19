use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A messaging platform (Telegram, Slack, ...) users reach the bot through.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Platform {
    pub id: i64,
    pub slug: String,
    pub name: String,
}
