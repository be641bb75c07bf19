use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::api::dtos::{envelope, CreateLocationRequest};
use crate::api::routes::AppState;
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/events/{event_id}/locations", web::get().to(list_locations))
        .route(
            "/events/{event_id}/locations",
            web::post().to(create_location),
        );
}

#[utoipa::path(
    get,
    path = "/events/{event_id}/locations",
    responses(
        (status = 200, description = "The event's locations, alphabetically"),
        (status = 404, description = "Event not found"),
    ),
    tag = "locations"
)]
pub async fn list_locations(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let result = state.location_service.list(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(envelope::ok(result)))
}

#[utoipa::path(
    post,
    path = "/events/{event_id}/locations",
    request_body = CreateLocationRequest,
    responses(
        (status = 201, description = "Location created"),
        (status = 400, description = "Invalid location payload"),
        (status = 404, description = "Event not found"),
    ),
    tag = "locations"
)]
pub async fn create_location(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<CreateLocationRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()?;
    let result = state
        .location_service
        .create(path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(envelope::ok(result)))
}
