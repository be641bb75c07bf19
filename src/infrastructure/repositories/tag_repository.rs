use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::Tag;
use crate::error::AppResult;

use super::traits::TagRepository;

pub struct TagRepositoryImpl {
    pool: PgPool,
}

impl TagRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for TagRepositoryImpl {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Tag>> {
        let tag =
            sqlx::query_as::<_, Tag>("SELECT id, event_id, name, color FROM tags WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(tag)
    }

    async fn create(&self, tag: &Tag) -> AppResult<Tag> {
        let created = sqlx::query_as::<_, Tag>(
            "INSERT INTO tags (id, event_id, name, color) VALUES ($1, $2, $3, $4) \
             RETURNING id, event_id, name, color",
        )
        .bind(tag.id)
        .bind(tag.event_id)
        .bind(&tag.name)
        .bind(&tag.color)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn list_by_event(&self, event_id: i64) -> AppResult<Vec<Tag>> {
        let tags = sqlx::query_as::<_, Tag>(
            "SELECT id, event_id, name, color FROM tags WHERE event_id = $1 \
             ORDER BY name ASC, id DESC",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(tags)
    }
}
