use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::api::dtos::{envelope, CreateEventRequest, ListingParams};
use crate::api::routes::AppState;
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/events", web::get().to(list_events))
        .route("/events", web::post().to(create_event))
        .route("/events/{event_id}", web::get().to(get_event));
}

#[utoipa::path(
    get,
    path = "/events",
    params(ListingParams),
    responses(
        (status = 200, description = "A page of events in schedule order"),
        (status = 400, description = "Listing arguments error or pivot not found"),
    ),
    tag = "events"
)]
pub async fn list_events(
    state: web::Data<AppState>,
    query: web::Query<ListingParams>,
) -> AppResult<HttpResponse> {
    let result = state.event_service.list(&query).await?;
    Ok(HttpResponse::Ok().json(envelope::ok(result)))
}

#[utoipa::path(
    post,
    path = "/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created"),
        (status = 400, description = "Invalid event payload"),
    ),
    tag = "events"
)]
pub async fn create_event(
    state: web::Data<AppState>,
    payload: web::Json<CreateEventRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()?;
    let result = state.event_service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(envelope::ok(result)))
}

#[utoipa::path(
    get,
    path = "/events/{event_id}",
    responses(
        (status = 200, description = "The event"),
        (status = 404, description = "Event not found"),
    ),
    tag = "events"
)]
pub async fn get_event(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let result = state.event_service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(envelope::ok(result)))
}
