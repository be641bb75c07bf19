mod event_service;
mod location_service;
mod person_service;
mod platform_service;
mod session_service;
mod tag_service;
mod user_service;

pub use event_service::EventService;
pub use location_service::LocationService;
pub use person_service::PersonService;
pub use platform_service::PlatformService;
pub use session_service::SessionService;
pub use tag_service::TagService;
pub use user_service::UserService;
