use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::api::dtos::{envelope, CreateSessionRequest};
use crate::api::routes::AppState;
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/events/{event_id}/sessions", web::get().to(list_sessions))
        .route("/events/{event_id}/sessions", web::post().to(create_session))
        .route(
            "/events/{event_id}/sessions/{session_id}/persons/{person_id}",
            web::put().to(attach_person),
        )
        .route(
            "/events/{event_id}/sessions/{session_id}/persons/{person_id}",
            web::delete().to(detach_person),
        )
        .route(
            "/events/{event_id}/sessions/{session_id}/locations/{location_id}",
            web::put().to(attach_location),
        )
        .route(
            "/events/{event_id}/sessions/{session_id}/locations/{location_id}",
            web::delete().to(detach_location),
        )
        .route(
            "/events/{event_id}/sessions/{session_id}/tags/{tag_id}",
            web::put().to(attach_tag),
        )
        .route(
            "/events/{event_id}/sessions/{session_id}/tags/{tag_id}",
            web::delete().to(detach_tag),
        );
}

#[utoipa::path(
    get,
    path = "/events/{event_id}/sessions",
    responses(
        (status = 200, description = "The event's full schedule with attached ids"),
        (status = 404, description = "Event not found"),
    ),
    tag = "sessions"
)]
pub async fn list_sessions(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let result = state.session_service.list(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(envelope::ok(result)))
}

#[utoipa::path(
    post,
    path = "/events/{event_id}/sessions",
    request_body = CreateSessionRequest,
    responses(
        (status = 201, description = "Session created"),
        (status = 400, description = "Invalid session payload"),
        (status = 404, description = "Event not found"),
    ),
    tag = "sessions"
)]
pub async fn create_session(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<CreateSessionRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()?;
    let result = state
        .session_service
        .create(path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(envelope::ok(result)))
}

#[utoipa::path(
    put,
    path = "/events/{event_id}/sessions/{session_id}/persons/{person_id}",
    responses(
        (status = 204, description = "Person attached to session"),
        (status = 404, description = "Session or person not found"),
        (status = 409, description = "Person already attached"),
    ),
    tag = "sessions"
)]
pub async fn attach_person(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64, i64)>,
) -> AppResult<HttpResponse> {
    let (_event_id, session_id, person_id) = path.into_inner();
    state
        .session_service
        .attach_person(session_id, person_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[utoipa::path(
    delete,
    path = "/events/{event_id}/sessions/{session_id}/persons/{person_id}",
    responses(
        (status = 204, description = "Person detached from session"),
    ),
    tag = "sessions"
)]
pub async fn detach_person(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64, i64)>,
) -> AppResult<HttpResponse> {
    let (_event_id, session_id, person_id) = path.into_inner();
    state
        .session_service
        .detach_person(session_id, person_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[utoipa::path(
    put,
    path = "/events/{event_id}/sessions/{session_id}/locations/{location_id}",
    responses(
        (status = 204, description = "Location attached to session"),
        (status = 404, description = "Session or location not found"),
        (status = 409, description = "Location already attached"),
    ),
    tag = "sessions"
)]
pub async fn attach_location(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64, i64)>,
) -> AppResult<HttpResponse> {
    let (_event_id, session_id, location_id) = path.into_inner();
    state
        .session_service
        .attach_location(session_id, location_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[utoipa::path(
    delete,
    path = "/events/{event_id}/sessions/{session_id}/locations/{location_id}",
    responses(
        (status = 204, description = "Location detached from session"),
    ),
    tag = "sessions"
)]
pub async fn detach_location(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64, i64)>,
) -> AppResult<HttpResponse> {
    let (_event_id, session_id, location_id) = path.into_inner();
    state
        .session_service
        .detach_location(session_id, location_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[utoipa::path(
    put,
    path = "/events/{event_id}/sessions/{session_id}/tags/{tag_id}",
    responses(
        (status = 204, description = "Tag attached to session"),
        (status = 404, description = "Session or tag not found"),
        (status = 409, description = "Tag already attached"),
    ),
    tag = "sessions"
)]
pub async fn attach_tag(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64, i64)>,
) -> AppResult<HttpResponse> {
    let (_event_id, session_id, tag_id) = path.into_inner();
    state.session_service.attach_tag(session_id, tag_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[utoipa::path(
    delete,
    path = "/events/{event_id}/sessions/{session_id}/tags/{tag_id}",
    responses(
        (status = 204, description = "Tag detached from session"),
    ),
    tag = "sessions"
)]
pub async fn detach_tag(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64, i64)>,
) -> AppResult<HttpResponse> {
    let (_event_id, session_id, tag_id) = path.into_inner();
    state.session_service.detach_tag(session_id, tag_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
