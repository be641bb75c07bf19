use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::session::SessionLink;
use crate::domain::Session;
use crate::error::AppResult;

use super::traits::{SessionLinkKind, SessionRepository};

const COLUMNS: &str = "id, event_id, title, description, start_time, end_time, created_at";

pub struct SessionRepositoryImpl {
    pool: PgPool,
}

impl SessionRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for SessionRepositoryImpl {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Session>> {
        let session =
            sqlx::query_as::<_, Session>(&format!("SELECT {COLUMNS} FROM sessions WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(session)
    }

    async fn create(&self, session: &Session) -> AppResult<Session> {
        let created = sqlx::query_as::<_, Session>(&format!(
            r#"
            INSERT INTO sessions (id, event_id, title, description, start_time, end_time, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(session.id)
        .bind(session.event_id)
        .bind(&session.title)
        .bind(&session.description)
        .bind(session.start_time)
        .bind(session.end_time)
        .bind(session.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn list_by_event(&self, event_id: i64) -> AppResult<Vec<Session>> {
        let sessions = sqlx::query_as::<_, Session>(&format!(
            "SELECT {COLUMNS} FROM sessions WHERE event_id = $1 \
             ORDER BY start_time ASC, end_time ASC, created_at ASC, id DESC"
        ))
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(sessions)
    }

    async fn links(
        &self,
        kind: SessionLinkKind,
        session_ids: &[i64],
    ) -> AppResult<Vec<SessionLink>> {
        let query = format!(
            "SELECT session_id, {column} AS linked_id FROM {table} WHERE session_id = ANY($1)",
            column = kind.linked_column(),
            table = kind.table(),
        );
        let links = sqlx::query_as::<_, SessionLink>(&query)
            .bind(session_ids)
            .fetch_all(&self.pool)
            .await?;
        Ok(links)
    }

    async fn attach(
        &self,
        kind: SessionLinkKind,
        session_id: i64,
        linked_id: i64,
    ) -> AppResult<()> {
        let query = format!(
            "INSERT INTO {table} (session_id, {column}) VALUES ($1, $2)",
            column = kind.linked_column(),
            table = kind.table(),
        );
        sqlx::query(&query)
            .bind(session_id)
            .bind(linked_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn detach(
        &self,
        kind: SessionLinkKind,
        session_id: i64,
        linked_id: i64,
    ) -> AppResult<()> {
        let query = format!(
            "DELETE FROM {table} WHERE session_id = $1 AND {column} = $2",
            column = kind.linked_column(),
            table = kind.table(),
        );
        sqlx::query(&query)
            .bind(session_id)
            .bind(linked_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
