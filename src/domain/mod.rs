pub mod event;
pub mod location;
pub mod person;
pub mod platform;
pub mod session;
pub mod tag;
pub mod user;

pub use event::Event;
pub use location::Location;
pub use person::Person;
pub use platform::Platform;
pub use session::Session;
pub use tag::Tag;
pub use user::User;
