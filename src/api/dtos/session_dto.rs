use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Session;

use super::common::{id_string, id_string_vec};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    #[serde(with = "id_string")]
    #[schema(value_type = String)]
    pub id: i64,
    #[serde(with = "id_string")]
    #[schema(value_type = String)]
    pub event_id: i64,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    #[serde(with = "id_string_vec")]
    #[schema(value_type = Vec<String>)]
    pub persons: Vec<i64>,
    #[serde(with = "id_string_vec")]
    #[schema(value_type = Vec<String>)]
    pub locations: Vec<i64>,
    #[serde(with = "id_string_vec")]
    #[schema(value_type = Vec<String>)]
    pub tags: Vec<i64>,
}

impl SessionResponse {
    pub fn new(
        session: Session,
        persons: Vec<i64>,
        locations: Vec<i64>,
        tags: Vec<i64>,
    ) -> Self {
        Self {
            id: session.id,
            event_id: session.event_id,
            title: session.title,
            description: session.description,
            start_time: session.start_time,
            end_time: session.end_time,
            created_at: session.created_at,
            persons,
            locations,
            tags,
        }
    }
}

impl From<Session> for SessionResponse {
    /// A freshly created session has nothing attached yet.
    fn from(session: Session) -> Self {
        Self::new(session, Vec::new(), Vec::new(), Vec::new())
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSessionRequest {
    #[validate(length(min = 1, max = 1024))]
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        Session {
            id: 10,
            event_id: 3,
            title: "Keynote".to_string(),
            description: "Opening keynote".to_string(),
            start_time: Utc::now(),
            end_time: Utc::now(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn attachment_ids_serialize_as_string_arrays() {
        let response = SessionResponse::new(sample_session(), vec![100, 101], vec![200], vec![]);

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["persons"], serde_json::json!(["100", "101"]));
        assert_eq!(value["locations"], serde_json::json!(["200"]));
        assert_eq!(value["tags"], serde_json::json!([]));
    }

    #[test]
    fn created_session_starts_with_empty_attachments() {
        let response = SessionResponse::from(sample_session());
        assert!(response.persons.is_empty());
        assert!(response.locations.is_empty());
        assert!(response.tags.is_empty());
    }
}
