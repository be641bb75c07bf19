use std::sync::Arc;

use crate::api::dtos::{CreatePlatformRequest, ListingParams, PlatformResponse};
use crate::domain::Platform;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::PlatformRepository;
use crate::infrastructure::snowflake::SnowflakeGenerator;
use crate::listing::Listing;

/// Limits and default options for the platforms listing.
const LISTING: Listing = Listing::new(1, 100, 25);

#[derive(Clone)]
pub struct PlatformService {
    platform_repo: Arc<dyn PlatformRepository>,
    id_generator: Arc<SnowflakeGenerator>,
}

impl PlatformService {
    pub fn new(
        platform_repo: Arc<dyn PlatformRepository>,
        id_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            platform_repo,
            id_generator,
        }
    }

    pub async fn list(&self, query: &ListingParams) -> AppResult<Vec<PlatformResponse>> {
        let (pivot_id, limit, direction) = LISTING.validate(
            query.before.as_deref(),
            query.after.as_deref(),
            query.limit.as_deref(),
        )?;

        let pivot = match pivot_id {
            Some(id) => Some(
                self.platform_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::pivot_not_found("platform"))?,
            ),
            None if query.has_cursor() => return Err(AppError::pivot_not_found("platform")),
            None => None,
        };

        let mut platforms = self
            .platform_repo
            .list(pivot.as_ref(), limit, direction)
            .await?;
        if direction.is_reversed() {
            platforms.reverse();
        }

        Ok(platforms.into_iter().map(PlatformResponse::from).collect())
    }

    pub async fn create(&self, request: CreatePlatformRequest) -> AppResult<PlatformResponse> {
        let platform = Platform {
            id: self.id_generator.next_id(),
            slug: request.slug,
            name: request.name,
        };

        let created = self.platform_repo.create(&platform).await?;
        Ok(created.into())
    }
}
