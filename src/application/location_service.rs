use std::sync::Arc;

use crate::api::dtos::{CreateLocationRequest, LocationResponse};
use crate::domain::Location;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::{EventRepository, LocationRepository};
use crate::infrastructure::snowflake::SnowflakeGenerator;

#[derive(Clone)]
pub struct LocationService {
    event_repo: Arc<dyn EventRepository>,
    location_repo: Arc<dyn LocationRepository>,
    id_generator: Arc<SnowflakeGenerator>,
}

impl LocationService {
    pub fn new(
        event_repo: Arc<dyn EventRepository>,
        location_repo: Arc<dyn LocationRepository>,
        id_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            event_repo,
            location_repo,
            id_generator,
        }
    }

    pub async fn list(&self, event_id: i64) -> AppResult<Vec<LocationResponse>> {
        self.ensure_event_exists(event_id).await?;

        let locations = self.location_repo.list_by_event(event_id).await?;
        Ok(locations.into_iter().map(LocationResponse::from).collect())
    }

    pub async fn create(
        &self,
        event_id: i64,
        request: CreateLocationRequest,
    ) -> AppResult<LocationResponse> {
        self.ensure_event_exists(event_id).await?;

        let location = Location {
            id: self.id_generator.next_id(),
            event_id,
            name: request.name,
        };

        let created = self.location_repo.create(&location).await?;
        Ok(created.into())
    }

    async fn ensure_event_exists(&self, event_id: i64) -> AppResult<()> {
        if self.event_repo.find_by_id(event_id).await?.is_none() {
            return Err(AppError::not_found("Event"));
        }
        Ok(())
    }
}
