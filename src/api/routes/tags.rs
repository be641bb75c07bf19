use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::api::dtos::{envelope, CreateTagRequest};
use crate::api::routes::AppState;
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/events/{event_id}/tags", web::get().to(list_tags))
        .route("/events/{event_id}/tags", web::post().to(create_tag));
}

#[utoipa::path(
    get,
    path = "/events/{event_id}/tags",
    responses(
        (status = 200, description = "The event's tags, alphabetically"),
        (status = 404, description = "Event not found"),
    ),
    tag = "tags"
)]
pub async fn list_tags(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let result = state.tag_service.list(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(envelope::ok(result)))
}

#[utoipa::path(
    post,
    path = "/events/{event_id}/tags",
    request_body = CreateTagRequest,
    responses(
        (status = 201, description = "Tag created"),
        (status = 400, description = "Invalid tag payload"),
        (status = 404, description = "Event not found"),
    ),
    tag = "tags"
)]
pub async fn create_tag(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<CreateTagRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()?;
    let result = state
        .tag_service
        .create(path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(envelope::ok(result)))
}
