use std::sync::Arc;

use chrono::Utc;

use crate::api::dtos::{CreateEventRequest, EventResponse, ListingParams};
use crate::domain::Event;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::EventRepository;
use crate::infrastructure::snowflake::SnowflakeGenerator;
use crate::listing::Listing;

/// Limits and default options for the events listing.
const LISTING: Listing = Listing::new(1, 100, 25);

#[derive(Clone)]
pub struct EventService {
    event_repo: Arc<dyn EventRepository>,
    id_generator: Arc<SnowflakeGenerator>,
}

impl EventService {
    pub fn new(event_repo: Arc<dyn EventRepository>, id_generator: Arc<SnowflakeGenerator>) -> Self {
        Self {
            event_repo,
            id_generator,
        }
    }

    pub async fn list(&self, query: &ListingParams) -> AppResult<Vec<EventResponse>> {
        let (pivot_id, limit, direction) = LISTING.validate(
            query.before.as_deref(),
            query.after.as_deref(),
            query.limit.as_deref(),
        )?;

        let pivot = match pivot_id {
            Some(id) => Some(
                self.event_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::pivot_not_found("event"))?,
            ),
            // A cursor was supplied but named no reachable entity.
            None if query.has_cursor() => return Err(AppError::pivot_not_found("event")),
            None => None,
        };

        let mut events = self
            .event_repo
            .list(pivot.as_ref(), limit, direction)
            .await?;
        if direction.is_reversed() {
            events.reverse();
        }

        Ok(events.into_iter().map(EventResponse::from).collect())
    }

    pub async fn get(&self, id: i64) -> AppResult<EventResponse> {
        let event = self
            .event_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Event"))?;
        Ok(event.into())
    }

    pub async fn create(&self, request: CreateEventRequest) -> AppResult<EventResponse> {
        let event = Event {
            id: self.id_generator.next_id(),
            name: request.name,
            description: request.description,
            start_time: request.start_time,
            end_time: request.end_time,
            created_at: Utc::now(),
        };

        let created = self.event_repo.create(&event).await?;
        Ok(created.into())
    }
}
