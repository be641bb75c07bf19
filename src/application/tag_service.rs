use std::sync::Arc;

use crate::api::dtos::{CreateTagRequest, TagResponse};
use crate::domain::Tag;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::{EventRepository, TagRepository};
use crate::infrastructure::snowflake::SnowflakeGenerator;

#[derive(Clone)]
pub struct TagService {
    event_repo: Arc<dyn EventRepository>,
    tag_repo: Arc<dyn TagRepository>,
    id_generator: Arc<SnowflakeGenerator>,
}

impl TagService {
    pub fn new(
        event_repo: Arc<dyn EventRepository>,
        tag_repo: Arc<dyn TagRepository>,
        id_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            event_repo,
            tag_repo,
            id_generator,
        }
    }

    pub async fn list(&self, event_id: i64) -> AppResult<Vec<TagResponse>> {
        self.ensure_event_exists(event_id).await?;

        let tags = self.tag_repo.list_by_event(event_id).await?;
        Ok(tags.into_iter().map(TagResponse::from).collect())
    }

    pub async fn create(&self, event_id: i64, request: CreateTagRequest) -> AppResult<TagResponse> {
        self.ensure_event_exists(event_id).await?;

        let tag = Tag {
            id: self.id_generator.next_id(),
            event_id,
            name: request.name,
            color: request.color,
        };

        let created = self.tag_repo.create(&tag).await?;
        Ok(created.into())
    }

    async fn ensure_event_exists(&self, event_id: i64) -> AppResult<()> {
        if self.event_repo.find_by_id(event_id).await?.is_none() {
            return Err(AppError::not_found("Event"));
        }
        Ok(())
    }
}
