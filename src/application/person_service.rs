use std::sync::Arc;

use crate::api::dtos::{CreatePersonRequest, PersonResponse};
use crate::domain::Person;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::{EventRepository, PersonRepository};
use crate::infrastructure::snowflake::SnowflakeGenerator;

#[derive(Clone)]
pub struct PersonService {
    event_repo: Arc<dyn EventRepository>,
    person_repo: Arc<dyn PersonRepository>,
    id_generator: Arc<SnowflakeGenerator>,
}

impl PersonService {
    pub fn new(
        event_repo: Arc<dyn EventRepository>,
        person_repo: Arc<dyn PersonRepository>,
        id_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            event_repo,
            person_repo,
            id_generator,
        }
    }

    pub async fn list(&self, event_id: i64) -> AppResult<Vec<PersonResponse>> {
        self.ensure_event_exists(event_id).await?;

        let persons = self.person_repo.list_by_event(event_id).await?;
        Ok(persons.into_iter().map(PersonResponse::from).collect())
    }

    pub async fn create(
        &self,
        event_id: i64,
        request: CreatePersonRequest,
    ) -> AppResult<PersonResponse> {
        self.ensure_event_exists(event_id).await?;

        let person = Person {
            id: self.id_generator.next_id(),
            event_id,
            name: request.name,
        };

        let created = self.person_repo.create(&person).await?;
        Ok(created.into())
    }

    async fn ensure_event_exists(&self, event_id: i64) -> AppResult<()> {
        if self.event_repo.find_by_id(event_id).await?.is_none() {
            return Err(AppError::not_found("Event"));
        }
        Ok(())
    }
}
