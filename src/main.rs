use std::sync::Arc;
use std::time::Instant;

use actix_web::dev::Service as _;
use actix_web::{middleware::Logger, web, App, HttpServer};
use event_backend::api::{openapi, routes, routes::AppState};
use event_backend::application::{
    EventService, LocationService, PersonService, PlatformService, SessionService, TagService,
    UserService,
};
use event_backend::config::AppConfig;
use event_backend::infrastructure::db::{migrations::run_migrations, pool::create_pool};
use event_backend::infrastructure::repositories::{
    EventRepositoryImpl, LocationRepositoryImpl, PersonRepositoryImpl, PlatformRepositoryImpl,
    SessionRepositoryImpl, TagRepositoryImpl, UserRepositoryImpl,
};
use event_backend::infrastructure::snowflake::SnowflakeGenerator;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter, Layer};
use uuid::Uuid;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().expect("failed to load application configuration");

    let fmt_layer = if config.logging.json_format {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed()
    } else {
        fmt::layer().boxed()
    };
    tracing_subscriber::registry()
        .with(EnvFilter::new(config.logging.level.clone()))
        .with(fmt_layer)
        .init();

    let pool = create_pool(&config.database)
        .await
        .expect("failed to create database pool");

    run_migrations(&pool)
        .await
        .expect("database migrations failed");

    let event_repo = Arc::new(EventRepositoryImpl::new(pool.clone()));
    let session_repo = Arc::new(SessionRepositoryImpl::new(pool.clone()));
    let person_repo = Arc::new(PersonRepositoryImpl::new(pool.clone()));
    let location_repo = Arc::new(LocationRepositoryImpl::new(pool.clone()));
    let tag_repo = Arc::new(TagRepositoryImpl::new(pool.clone()));
    let user_repo = Arc::new(UserRepositoryImpl::new(pool.clone()));
    let platform_repo = Arc::new(PlatformRepositoryImpl::new(pool.clone()));

    let id_generator = Arc::new(SnowflakeGenerator::new(config.app.machine_id));

    let state = AppState {
        event_service: Arc::new(EventService::new(event_repo.clone(), id_generator.clone())),
        session_service: Arc::new(SessionService::new(
            event_repo.clone(),
            session_repo,
            person_repo.clone(),
            location_repo.clone(),
            tag_repo.clone(),
            id_generator.clone(),
        )),
        person_service: Arc::new(PersonService::new(
            event_repo.clone(),
            person_repo,
            id_generator.clone(),
        )),
        location_service: Arc::new(LocationService::new(
            event_repo.clone(),
            location_repo,
            id_generator.clone(),
        )),
        tag_service: Arc::new(TagService::new(
            event_repo.clone(),
            tag_repo,
            id_generator.clone(),
        )),
        user_service: Arc::new(UserService::new(user_repo, id_generator.clone())),
        platform_service: Arc::new(PlatformService::new(platform_repo, id_generator)),
        db_pool: pool.clone(),
    };

    let bind_host = config.app.host.clone();
    let bind_port = config.app.port;

    info!(host = %bind_host, port = bind_port, "starting server");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap_fn(|req, srv| {
                let request_id = Uuid::new_v4().to_string();
                let path = req.path().to_string();
                let method = req.method().to_string();
                let start = Instant::now();

                let fut = srv.call(req);
                async move {
                    let mut response = fut.await?;
                    response.headers_mut().insert(
                        actix_web::http::header::HeaderName::from_static("x-request-id"),
                        actix_web::http::header::HeaderValue::from_str(&request_id)
                            .unwrap_or_else(|_| {
                                actix_web::http::header::HeaderValue::from_static(
                                    "invalid-request-id",
                                )
                            }),
                    );

                    info!(
                        request_id = %request_id,
                        method = %method,
                        path = %path,
                        status = response.status().as_u16(),
                        latency_ms = start.elapsed().as_millis() as u64,
                        "request completed"
                    );
                    Ok(response)
                }
            })
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
            .configure(openapi::configure_swagger_ui)
    })
    .bind((bind_host, bind_port))?
    .run()
    .await
}
