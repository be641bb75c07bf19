use std::sync::Arc;

use chrono::Utc;

use crate::api::dtos::{ListingParams, UserResponse};
use crate::domain::User;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::UserRepository;
use crate::infrastructure::snowflake::SnowflakeGenerator;
use crate::listing::Listing;

/// Limits and default options for the users listing.
const LISTING: Listing = Listing::new(1, 100, 25);

#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    id_generator: Arc<SnowflakeGenerator>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, id_generator: Arc<SnowflakeGenerator>) -> Self {
        Self {
            user_repo,
            id_generator,
        }
    }

    pub async fn list(&self, query: &ListingParams) -> AppResult<Vec<UserResponse>> {
        let (pivot_id, limit, direction) = LISTING.validate(
            query.before.as_deref(),
            query.after.as_deref(),
            query.limit.as_deref(),
        )?;

        let pivot = match pivot_id {
            Some(id) => Some(
                self.user_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::pivot_not_found("user"))?,
            ),
            None if query.has_cursor() => return Err(AppError::pivot_not_found("user")),
            None => None,
        };

        let mut users = self.user_repo.list(pivot.as_ref(), limit, direction).await?;
        if direction.is_reversed() {
            users.reverse();
        }

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn create(&self) -> AppResult<UserResponse> {
        let user = User {
            id: self.id_generator.next_id(),
            created_at: Utc::now(),
        };

        let created = self.user_repo.create(&user).await?;
        Ok(created.into())
    }
}
