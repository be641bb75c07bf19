use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::Location;
use crate::error::AppResult;

use super::traits::LocationRepository;

pub struct LocationRepositoryImpl {
    pool: PgPool,
}

impl LocationRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationRepository for LocationRepositoryImpl {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Location>> {
        let location =
            sqlx::query_as::<_, Location>("SELECT id, event_id, name FROM locations WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(location)
    }

    async fn create(&self, location: &Location) -> AppResult<Location> {
        let created = sqlx::query_as::<_, Location>(
            "INSERT INTO locations (id, event_id, name) VALUES ($1, $2, $3) \
             RETURNING id, event_id, name",
        )
        .bind(location.id)
        .bind(location.event_id)
        .bind(&location.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn list_by_event(&self, event_id: i64) -> AppResult<Vec<Location>> {
        let locations = sqlx::query_as::<_, Location>(
            "SELECT id, event_id, name FROM locations WHERE event_id = $1 \
             ORDER BY name ASC, id DESC",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(locations)
    }
}
