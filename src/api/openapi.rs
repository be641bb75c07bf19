use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Event endpoints
        crate::api::routes::events::list_events,
        crate::api::routes::events::create_event,
        crate::api::routes::events::get_event,
        // Session endpoints
        crate::api::routes::sessions::list_sessions,
        crate::api::routes::sessions::create_session,
        crate::api::routes::sessions::attach_person,
        crate::api::routes::sessions::detach_person,
        crate::api::routes::sessions::attach_location,
        crate::api::routes::sessions::detach_location,
        crate::api::routes::sessions::attach_tag,
        crate::api::routes::sessions::detach_tag,
        // Person endpoints
        crate::api::routes::persons::list_persons,
        crate::api::routes::persons::create_person,
        // Location endpoints
        crate::api::routes::locations::list_locations,
        crate::api::routes::locations::create_location,
        // Tag endpoints
        crate::api::routes::tags::list_tags,
        crate::api::routes::tags::create_tag,
        // User endpoints
        crate::api::routes::users::list_users,
        crate::api::routes::users::create_user,
        // Platform endpoints
        crate::api::routes::platforms::list_platforms,
        crate::api::routes::platforms::create_platform,
        // Health check
        crate::api::routes::health,
        crate::api::routes::ready,
    ),
    components(
        schemas(
            crate::api::dtos::event_dto::EventResponse,
            crate::api::dtos::event_dto::CreateEventRequest,
            crate::api::dtos::session_dto::SessionResponse,
            crate::api::dtos::session_dto::CreateSessionRequest,
            crate::api::dtos::person_dto::PersonResponse,
            crate::api::dtos::person_dto::CreatePersonRequest,
            crate::api::dtos::location_dto::LocationResponse,
            crate::api::dtos::location_dto::CreateLocationRequest,
            crate::api::dtos::tag_dto::TagResponse,
            crate::api::dtos::tag_dto::CreateTagRequest,
            crate::api::dtos::user_dto::UserResponse,
            crate::api::dtos::platform_dto::PlatformResponse,
            crate::api::dtos::platform_dto::CreatePlatformRequest,
            crate::api::dtos::envelope::ErrorEnvelope,
            crate::api::dtos::envelope::ErrorDetails,
        )
    ),
    tags(
        (name = "events", description = "Conference event management"),
        (name = "sessions", description = "Event schedule and session attachments"),
        (name = "persons", description = "Event speakers"),
        (name = "locations", description = "Event locations"),
        (name = "tags", description = "Event tags"),
        (name = "users", description = "Bot users"),
        (name = "platforms", description = "Messaging platforms"),
        (name = "health", description = "Health check endpoints"),
    ),
    info(
        title = "Event Backend API",
        version = "0.1.0",
        description = "Conference event data backend",
    )
)]
pub struct ApiDoc;

pub fn configure_swagger_ui(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}
