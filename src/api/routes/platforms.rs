use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::api::dtos::{envelope, CreatePlatformRequest, ListingParams};
use crate::api::routes::AppState;
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/platforms", web::get().to(list_platforms))
        .route("/platforms", web::post().to(create_platform));
}

#[utoipa::path(
    get,
    path = "/platforms",
    params(ListingParams),
    responses(
        (status = 200, description = "A page of platforms in slug order"),
        (status = 400, description = "Listing arguments error or pivot not found"),
    ),
    tag = "platforms"
)]
pub async fn list_platforms(
    state: web::Data<AppState>,
    query: web::Query<ListingParams>,
) -> AppResult<HttpResponse> {
    let result = state.platform_service.list(&query).await?;
    Ok(HttpResponse::Ok().json(envelope::ok(result)))
}

#[utoipa::path(
    post,
    path = "/platforms",
    request_body = CreatePlatformRequest,
    responses(
        (status = 201, description = "Platform created"),
        (status = 400, description = "Invalid platform payload"),
        (status = 409, description = "Platform slug already taken"),
    ),
    tag = "platforms"
)]
pub async fn create_platform(
    state: web::Data<AppState>,
    payload: web::Json<CreatePlatformRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()?;
    let result = state.platform_service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(envelope::ok(result)))
}
