use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Tag;

use super::common::id_string;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TagResponse {
    #[serde(with = "id_string")]
    #[schema(value_type = String)]
    pub id: i64,
    #[serde(with = "id_string")]
    #[schema(value_type = String)]
    pub event_id: i64,
    pub name: String,
    pub color: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            event_id: tag.event_id,
            name: tag.name,
            color: tag.color,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTagRequest {
    #[validate(length(min = 1, max = 1024))]
    pub name: String,
    /// Hex color label, e.g. `#A0C3FF`.
    #[validate(length(min = 1, max = 8))]
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn color_length_is_bounded() {
        let valid = CreateTagRequest {
            name: "Android".to_string(),
            color: "#A0C3FF".to_string(),
        };
        assert!(valid.validate().is_ok());

        let too_long = CreateTagRequest {
            name: "Android".to_string(),
            color: "#A0C3FF00".to_string(),
        };
        assert!(too_long.validate().is_err());
    }
}
