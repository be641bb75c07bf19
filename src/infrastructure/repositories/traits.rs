use async_trait::async_trait;

use crate::domain::session::SessionLink;
use crate::domain::{Event, Location, Person, Platform, Session, Tag, User};
use crate::error::AppResult;
use crate::listing::Direction;

/// The three session association tables share one access shape; the kind
/// selects the table and the attached-entity column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionLinkKind {
    Person,
    Location,
    Tag,
}

impl SessionLinkKind {
    pub const fn table(self) -> &'static str {
        match self {
            SessionLinkKind::Person => "session_persons",
            SessionLinkKind::Location => "session_locations",
            SessionLinkKind::Tag => "session_tags",
        }
    }

    pub const fn linked_column(self) -> &'static str {
        match self {
            SessionLinkKind::Person => "person_id",
            SessionLinkKind::Location => "location_id",
            SessionLinkKind::Tag => "tag_id",
        }
    }
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Event>>;
    async fn create(&self, event: &Event) -> AppResult<Event>;
    /// Keyset page relative to `pivot`; rows come back in query order, so a
    /// `Before` page still needs reversing by the caller.
    async fn list(
        &self,
        pivot: Option<&Event>,
        limit: i64,
        direction: Direction,
    ) -> AppResult<Vec<Event>>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Session>>;
    async fn create(&self, session: &Session) -> AppResult<Session>;
    async fn list_by_event(&self, event_id: i64) -> AppResult<Vec<Session>>;
    async fn links(
        &self,
        kind: SessionLinkKind,
        session_ids: &[i64],
    ) -> AppResult<Vec<SessionLink>>;
    async fn attach(&self, kind: SessionLinkKind, session_id: i64, linked_id: i64)
        -> AppResult<()>;
    async fn detach(&self, kind: SessionLinkKind, session_id: i64, linked_id: i64)
        -> AppResult<()>;
}

#[async_trait]
pub trait PersonRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Person>>;
    async fn create(&self, person: &Person) -> AppResult<Person>;
    async fn list_by_event(&self, event_id: i64) -> AppResult<Vec<Person>>;
}

#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Location>>;
    async fn create(&self, location: &Location) -> AppResult<Location>;
    async fn list_by_event(&self, event_id: i64) -> AppResult<Vec<Location>>;
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Tag>>;
    async fn create(&self, tag: &Tag) -> AppResult<Tag>;
    async fn list_by_event(&self, event_id: i64) -> AppResult<Vec<Tag>>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;
    async fn create(&self, user: &User) -> AppResult<User>;
    async fn list(
        &self,
        pivot: Option<&User>,
        limit: i64,
        direction: Direction,
    ) -> AppResult<Vec<User>>;
}

#[async_trait]
pub trait PlatformRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Platform>>;
    async fn create(&self, platform: &Platform) -> AppResult<Platform>;
    async fn list(
        &self,
        pivot: Option<&Platform>,
        limit: i64,
        direction: Direction,
    ) -> AppResult<Vec<Platform>>;
}

#[cfg(test)]
mod tests {
    use super::SessionLinkKind;

    #[test]
    fn link_kinds_map_to_tables_and_columns() {
        assert_eq!(SessionLinkKind::Person.table(), "session_persons");
        assert_eq!(SessionLinkKind::Person.linked_column(), "person_id");
        assert_eq!(SessionLinkKind::Location.table(), "session_locations");
        assert_eq!(SessionLinkKind::Location.linked_column(), "location_id");
        assert_eq!(SessionLinkKind::Tag.table(), "session_tags");
        assert_eq!(SessionLinkKind::Tag.linked_column(), "tag_id");
    }
}
