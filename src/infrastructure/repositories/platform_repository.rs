use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::Platform;
use crate::error::AppResult;
use crate::listing::{self, Direction, SortColumn};

use super::traits::PlatformRepository;

// Alphabetical by slug; ids break ties between equal slugs (which the unique
// constraint rules out anyway, but the contract stays total either way).
const SORT: &[SortColumn] = &[SortColumn::asc("slug"), SortColumn::desc("id")];

pub struct PlatformRepositoryImpl {
    pool: PgPool,
}

impl PlatformRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlatformRepository for PlatformRepositoryImpl {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Platform>> {
        let platform =
            sqlx::query_as::<_, Platform>("SELECT id, slug, name FROM platforms WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(platform)
    }

    async fn create(&self, platform: &Platform) -> AppResult<Platform> {
        let created = sqlx::query_as::<_, Platform>(
            "INSERT INTO platforms (id, slug, name) VALUES ($1, $2, $3) RETURNING id, slug, name",
        )
        .bind(platform.id)
        .bind(&platform.slug)
        .bind(&platform.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn list(
        &self,
        pivot: Option<&Platform>,
        limit: i64,
        direction: Direction,
    ) -> AppResult<Vec<Platform>> {
        let order = listing::order_clause(SORT, direction);

        let platforms = match pivot {
            Some(pivot) => {
                let predicate = listing::keyset_predicate(SORT, direction, 2);
                let query = format!(
                    "SELECT id, slug, name FROM platforms WHERE {predicate} ORDER BY {order} LIMIT $1"
                );
                sqlx::query_as::<_, Platform>(&query)
                    .bind(limit)
                    .bind(&pivot.slug)
                    .bind(pivot.id)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let query = format!("SELECT id, slug, name FROM platforms ORDER BY {order} LIMIT $1");
                sqlx::query_as::<_, Platform>(&query)
                    .bind(limit)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(platforms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyset_queries_flip_the_mixed_sort_contract() {
        assert_eq!(
            listing::keyset_predicate(SORT, Direction::After, 2),
            "(slug > $2 OR (slug = $2 AND id < $3))"
        );
        assert_eq!(
            listing::keyset_predicate(SORT, Direction::Before, 2),
            "(slug < $2 OR (slug = $2 AND id > $3))"
        );
        assert_eq!(listing::order_clause(SORT, Direction::After), "slug ASC, id DESC");
        assert_eq!(listing::order_clause(SORT, Direction::Before), "slug DESC, id ASC");
    }
}
