use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Person;

use super::common::id_string;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PersonResponse {
    #[serde(with = "id_string")]
    #[schema(value_type = String)]
    pub id: i64,
    #[serde(with = "id_string")]
    #[schema(value_type = String)]
    pub event_id: i64,
    pub name: String,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            event_id: person.event_id,
            name: person.name,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePersonRequest {
    #[validate(length(min = 1, max = 1024))]
    pub name: String,
}
