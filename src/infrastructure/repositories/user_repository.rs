use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::User;
use crate::error::AppResult;
use crate::listing::{self, Direction, SortColumn};

use super::traits::UserRepository;

// Newest users first; ids break creation-time ties.
const SORT: &[SortColumn] = &[SortColumn::desc("created_at"), SortColumn::desc("id")];

pub struct UserRepositoryImpl {
    pool: PgPool,
}

impl UserRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT id, created_at FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn create(&self, user: &User) -> AppResult<User> {
        let created = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, created_at) VALUES ($1, $2) RETURNING id, created_at",
        )
        .bind(user.id)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn list(
        &self,
        pivot: Option<&User>,
        limit: i64,
        direction: Direction,
    ) -> AppResult<Vec<User>> {
        let order = listing::order_clause(SORT, direction);

        let users = match pivot {
            Some(pivot) => {
                let predicate = listing::keyset_predicate(SORT, direction, 2);
                let query = format!(
                    "SELECT id, created_at FROM users WHERE {predicate} ORDER BY {order} LIMIT $1"
                );
                sqlx::query_as::<_, User>(&query)
                    .bind(limit)
                    .bind(pivot.created_at)
                    .bind(pivot.id)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let query = format!("SELECT id, created_at FROM users ORDER BY {order} LIMIT $1");
                sqlx::query_as::<_, User>(&query)
                    .bind(limit)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyset_queries_follow_the_users_sort_contract() {
        assert_eq!(
            listing::keyset_predicate(SORT, Direction::After, 2),
            "(created_at < $2 OR (created_at = $2 AND id < $3))"
        );
        assert_eq!(
            listing::keyset_predicate(SORT, Direction::Before, 2),
            "(created_at > $2 OR (created_at = $2 AND id > $3))"
        );
        assert_eq!(
            listing::order_clause(SORT, Direction::After),
            "created_at DESC, id DESC"
        );
        assert_eq!(
            listing::order_clause(SORT, Direction::Before),
            "created_at ASC, id ASC"
        );
    }
}
