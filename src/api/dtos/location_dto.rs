use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Location;

use super::common::id_string;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LocationResponse {
    #[serde(with = "id_string")]
    #[schema(value_type = String)]
    pub id: i64,
    #[serde(with = "id_string")]
    #[schema(value_type = String)]
    pub event_id: i64,
    pub name: String,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            event_id: location.event_id,
            name: location.name,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLocationRequest {
    #[validate(length(min = 1, max = 512))]
    pub name: String,
}
