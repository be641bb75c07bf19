use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Platform;

use super::common::id_string;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlatformResponse {
    #[serde(with = "id_string")]
    #[schema(value_type = String)]
    pub id: i64,
    pub slug: String,
    pub name: String,
}

impl From<Platform> for PlatformResponse {
    fn from(platform: Platform) -> Self {
        Self {
            id: platform.id,
            slug: platform.slug,
            name: platform.name,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePlatformRequest {
    #[validate(length(min = 1, max = 64))]
    pub slug: String,
    #[validate(length(min = 1, max = 128))]
    pub name: String,
}
