use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::Person;
use crate::error::AppResult;

use super::traits::PersonRepository;

pub struct PersonRepositoryImpl {
    pool: PgPool,
}

impl PersonRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonRepository for PersonRepositoryImpl {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Person>> {
        let person =
            sqlx::query_as::<_, Person>("SELECT id, event_id, name FROM persons WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(person)
    }

    async fn create(&self, person: &Person) -> AppResult<Person> {
        let created = sqlx::query_as::<_, Person>(
            "INSERT INTO persons (id, event_id, name) VALUES ($1, $2, $3) \
             RETURNING id, event_id, name",
        )
        .bind(person.id)
        .bind(person.event_id)
        .bind(&person.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn list_by_event(&self, event_id: i64) -> AppResult<Vec<Person>> {
        let persons = sqlx::query_as::<_, Person>(
            "SELECT id, event_id, name FROM persons WHERE event_id = $1 \
             ORDER BY name ASC, id DESC",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(persons)
    }
}
