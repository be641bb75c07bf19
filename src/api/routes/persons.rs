use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::api::dtos::{envelope, CreatePersonRequest};
use crate::api::routes::AppState;
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/events/{event_id}/persons", web::get().to(list_persons))
        .route("/events/{event_id}/persons", web::post().to(create_person));
}

#[utoipa::path(
    get,
    path = "/events/{event_id}/persons",
    responses(
        (status = 200, description = "The event's speakers, alphabetically"),
        (status = 404, description = "Event not found"),
    ),
    tag = "persons"
)]
pub async fn list_persons(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let result = state.person_service.list(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(envelope::ok(result)))
}

#[utoipa::path(
    post,
    path = "/events/{event_id}/persons",
    request_body = CreatePersonRequest,
    responses(
        (status = 201, description = "Person created"),
        (status = 400, description = "Invalid person payload"),
        (status = 404, description = "Event not found"),
    ),
    tag = "persons"
)]
pub async fn create_person(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<CreatePersonRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()?;
    let result = state
        .person_service
        .create(path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(envelope::ok(result)))
}
