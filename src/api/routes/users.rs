use actix_web::{web, HttpResponse};

use crate::api::dtos::{envelope, ListingParams};
use crate::api::routes::AppState;
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/users", web::get().to(list_users))
        .route("/users", web::post().to(create_user));
}

#[utoipa::path(
    get,
    path = "/users",
    params(ListingParams),
    responses(
        (status = 200, description = "A page of users, newest first"),
        (status = 400, description = "Listing arguments error or pivot not found"),
    ),
    tag = "users"
)]
pub async fn list_users(
    state: web::Data<AppState>,
    query: web::Query<ListingParams>,
) -> AppResult<HttpResponse> {
    let result = state.user_service.list(&query).await?;
    Ok(HttpResponse::Ok().json(envelope::ok(result)))
}

#[utoipa::path(
    post,
    path = "/users",
    responses(
        (status = 201, description = "User created"),
    ),
    tag = "users"
)]
pub async fn create_user(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let result = state.user_service.create().await?;
    Ok(HttpResponse::Created().json(envelope::ok(result)))
}
