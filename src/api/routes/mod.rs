use std::sync::Arc;

use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::application::{
    EventService, LocationService, PersonService, PlatformService, SessionService, TagService,
    UserService,
};
use crate::error::{AppError, AppResult};

pub mod events;
pub mod locations;
pub mod persons;
pub mod platforms;
pub mod sessions;
pub mod tags;
pub mod users;

#[derive(Clone)]
pub struct AppState {
    pub event_service: Arc<EventService>,
    pub session_service: Arc<SessionService>,
    pub person_service: Arc<PersonService>,
    pub location_service: Arc<LocationService>,
    pub tag_service: Arc<TagService>,
    pub user_service: Arc<UserService>,
    pub platform_service: Arc<PlatformService>,
    pub db_pool: PgPool,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(events::configure)
        .configure(sessions::configure)
        .configure(persons::configure)
        .configure(locations::configure)
        .configure(tags::configure)
        .configure(users::configure)
        .configure(platforms::configure)
        .route("/health", web::get().to(health))
        .route("/ready", web::get().to(ready));
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check passed")
    ),
    tag = "health"
)]
pub async fn health() -> &'static str {
    "ok"
}

#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Readiness check passed"),
        (status = 503, description = "Service not ready"),
    ),
    tag = "health"
)]
pub async fn ready(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db_pool)
        .await
        .map_err(|e| AppError::ServiceUnavailable {
            service: "database".to_string(),
            message: format!("Service not ready: {e}"),
        })?;
    Ok(HttpResponse::Ok().body("ready"))
}
