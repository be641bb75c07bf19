use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;

use crate::api::dtos::{CreateSessionRequest, SessionResponse};
use crate::domain::Session;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::{
    EventRepository, LocationRepository, PersonRepository, SessionLinkKind, SessionRepository,
    TagRepository,
};
use crate::infrastructure::snowflake::SnowflakeGenerator;

#[derive(Clone)]
pub struct SessionService {
    event_repo: Arc<dyn EventRepository>,
    session_repo: Arc<dyn SessionRepository>,
    person_repo: Arc<dyn PersonRepository>,
    location_repo: Arc<dyn LocationRepository>,
    tag_repo: Arc<dyn TagRepository>,
    id_generator: Arc<SnowflakeGenerator>,
}

impl SessionService {
    pub fn new(
        event_repo: Arc<dyn EventRepository>,
        session_repo: Arc<dyn SessionRepository>,
        person_repo: Arc<dyn PersonRepository>,
        location_repo: Arc<dyn LocationRepository>,
        tag_repo: Arc<dyn TagRepository>,
        id_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            event_repo,
            session_repo,
            person_repo,
            location_repo,
            tag_repo,
            id_generator,
        }
    }

    /// The event's full schedule with attached person/location/tag ids.
    /// Sessions are not listed with cursors; the schedule is returned whole.
    pub async fn list(&self, event_id: i64) -> AppResult<Vec<SessionResponse>> {
        self.ensure_event_exists(event_id).await?;

        let sessions = self.session_repo.list_by_event(event_id).await?;
        let session_ids: Vec<i64> = sessions.iter().map(|session| session.id).collect();

        let mut persons = self.linked_ids(SessionLinkKind::Person, &session_ids).await?;
        let mut locations = self
            .linked_ids(SessionLinkKind::Location, &session_ids)
            .await?;
        let mut tags = self.linked_ids(SessionLinkKind::Tag, &session_ids).await?;

        Ok(sessions
            .into_iter()
            .map(|session| {
                let id = session.id;
                SessionResponse::new(
                    session,
                    persons.remove(&id).unwrap_or_default(),
                    locations.remove(&id).unwrap_or_default(),
                    tags.remove(&id).unwrap_or_default(),
                )
            })
            .collect())
    }

    pub async fn create(
        &self,
        event_id: i64,
        request: CreateSessionRequest,
    ) -> AppResult<SessionResponse> {
        self.ensure_event_exists(event_id).await?;

        let session = Session {
            id: self.id_generator.next_id(),
            event_id,
            title: request.title,
            description: request.description,
            start_time: request.start_time,
            end_time: request.end_time,
            created_at: Utc::now(),
        };

        let created = self.session_repo.create(&session).await?;
        Ok(created.into())
    }

    pub async fn attach_person(&self, session_id: i64, person_id: i64) -> AppResult<()> {
        self.ensure_session_exists(session_id).await?;
        if self.person_repo.find_by_id(person_id).await?.is_none() {
            return Err(AppError::not_found("Person"));
        }
        self.session_repo
            .attach(SessionLinkKind::Person, session_id, person_id)
            .await
    }

    pub async fn detach_person(&self, session_id: i64, person_id: i64) -> AppResult<()> {
        self.session_repo
            .detach(SessionLinkKind::Person, session_id, person_id)
            .await
    }

    pub async fn attach_location(&self, session_id: i64, location_id: i64) -> AppResult<()> {
        self.ensure_session_exists(session_id).await?;
        if self.location_repo.find_by_id(location_id).await?.is_none() {
            return Err(AppError::not_found("Location"));
        }
        self.session_repo
            .attach(SessionLinkKind::Location, session_id, location_id)
            .await
    }

    pub async fn detach_location(&self, session_id: i64, location_id: i64) -> AppResult<()> {
        self.session_repo
            .detach(SessionLinkKind::Location, session_id, location_id)
            .await
    }

    pub async fn attach_tag(&self, session_id: i64, tag_id: i64) -> AppResult<()> {
        self.ensure_session_exists(session_id).await?;
        if self.tag_repo.find_by_id(tag_id).await?.is_none() {
            return Err(AppError::not_found("Tag"));
        }
        self.session_repo
            .attach(SessionLinkKind::Tag, session_id, tag_id)
            .await
    }

    pub async fn detach_tag(&self, session_id: i64, tag_id: i64) -> AppResult<()> {
        self.session_repo
            .detach(SessionLinkKind::Tag, session_id, tag_id)
            .await
    }

    async fn ensure_event_exists(&self, event_id: i64) -> AppResult<()> {
        if self.event_repo.find_by_id(event_id).await?.is_none() {
            return Err(AppError::not_found("Event"));
        }
        Ok(())
    }

    async fn ensure_session_exists(&self, session_id: i64) -> AppResult<()> {
        if self.session_repo.find_by_id(session_id).await?.is_none() {
            return Err(AppError::not_found("Session"));
        }
        Ok(())
    }

    async fn linked_ids(
        &self,
        kind: SessionLinkKind,
        session_ids: &[i64],
    ) -> AppResult<HashMap<i64, Vec<i64>>> {
        let mut grouped: HashMap<i64, Vec<i64>> = HashMap::new();
        for link in self.session_repo.links(kind, session_ids).await? {
            grouped.entry(link.session_id).or_default().push(link.linked_id);
        }
        Ok(grouped)
    }
}
