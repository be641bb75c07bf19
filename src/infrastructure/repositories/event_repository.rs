use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::Event;
use crate::error::AppResult;
use crate::listing::{self, Direction, SortColumn};

use super::traits::EventRepository;

/// Canonical presentation order for the events collection: soonest-starting
/// first, snowflake id as the tie-breaker.
const SORT: &[SortColumn] = &[SortColumn::asc("start_time"), SortColumn::desc("id")];

const COLUMNS: &str = "id, name, description, start_time, end_time, created_at";

pub struct EventRepositoryImpl {
    pool: PgPool,
}

impl EventRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for EventRepositoryImpl {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Event>> {
        let event =
            sqlx::query_as::<_, Event>(&format!("SELECT {COLUMNS} FROM events WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(event)
    }

    async fn create(&self, event: &Event) -> AppResult<Event> {
        let created = sqlx::query_as::<_, Event>(&format!(
            r#"
            INSERT INTO events (id, name, description, start_time, end_time, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(event.id)
        .bind(&event.name)
        .bind(&event.description)
        .bind(event.start_time)
        .bind(event.end_time)
        .bind(event.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn list(
        &self,
        pivot: Option<&Event>,
        limit: i64,
        direction: Direction,
    ) -> AppResult<Vec<Event>> {
        let order = listing::order_clause(SORT, direction);

        let events = match pivot {
            Some(pivot) => {
                let predicate = listing::keyset_predicate(SORT, direction, 2);
                let query = format!(
                    "SELECT {COLUMNS} FROM events WHERE {predicate} ORDER BY {order} LIMIT $1"
                );
                sqlx::query_as::<_, Event>(&query)
                    .bind(limit)
                    .bind(pivot.start_time)
                    .bind(pivot.id)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM events ORDER BY {order} LIMIT $1");
                sqlx::query_as::<_, Event>(&query)
                    .bind(limit)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyset_queries_follow_the_events_sort_contract() {
        assert_eq!(
            listing::keyset_predicate(SORT, Direction::After, 2),
            "(start_time > $2 OR (start_time = $2 AND id < $3))"
        );
        assert_eq!(
            listing::order_clause(SORT, Direction::Before),
            "start_time DESC, id ASC"
        );
    }
}
