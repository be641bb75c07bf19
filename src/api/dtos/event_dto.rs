use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Event;

use super::common::id_string;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    #[serde(with = "id_string")]
    #[schema(value_type = String)]
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            name: event.name,
            description: event.description,
            start_time: event.start_time,
            end_time: event.end_time,
            created_at: event.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 1024))]
    pub name: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_serializes_id_as_string_and_times_as_rfc3339() {
        let response = EventResponse {
            id: 459022949461131264,
            name: "Google I/O 2018".to_string(),
            description: "Developer festival".to_string(),
            start_time: "2018-05-08T10:00:00Z".parse().unwrap(),
            end_time: "2018-05-10T18:00:00Z".parse().unwrap(),
            created_at: "2018-01-02T03:04:05Z".parse().unwrap(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["id"], "459022949461131264");
        assert_eq!(value["start_time"], "2018-05-08T10:00:00Z");
        assert_eq!(value["created_at"], "2018-01-02T03:04:05Z");
    }

    #[test]
    fn create_request_rejects_empty_name() {
        let request = CreateEventRequest {
            name: String::new(),
            description: "d".to_string(),
            start_time: Utc::now(),
            end_time: Utc::now(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn create_request_rejects_oversized_name() {
        let request = CreateEventRequest {
            name: "a".repeat(1025),
            description: "d".to_string(),
            start_time: Utc::now(),
            end_time: Utc::now(),
        };
        assert!(request.validate().is_err());
    }
}
