mod event_repository;
mod location_repository;
mod person_repository;
mod platform_repository;
mod session_repository;
mod tag_repository;
mod traits;
mod user_repository;

pub use event_repository::EventRepositoryImpl;
pub use location_repository::LocationRepositoryImpl;
pub use person_repository::PersonRepositoryImpl;
pub use platform_repository::PlatformRepositoryImpl;
pub use session_repository::SessionRepositoryImpl;
pub use tag_repository::TagRepositoryImpl;
pub use traits::{
    EventRepository, LocationRepository, PersonRepository, PlatformRepository, SessionLinkKind,
    SessionRepository, TagRepository, UserRepository,
};
pub use user_repository::UserRepositoryImpl;
