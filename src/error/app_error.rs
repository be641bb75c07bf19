use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::api::dtos::envelope;
use crate::listing::ListingError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    InternalError(#[source] anyhow::Error),

    #[error("Service unavailable: {service}")]
    ServiceUnavailable { service: String, message: String },
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(envelope::error(self.public_message()))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl AppError {
    pub fn not_found(resource: &str) -> Self {
        AppError::NotFound(format!("{resource} not found"))
    }

    pub fn pivot_not_found(resource: &str) -> Self {
        // Listing endpoints report a missing pivot as a 400, unlike the 404
        // of a direct lookup; existing clients depend on the distinction.
        AppError::BadRequest(format!("Pivot {resource} not found"))
    }

    fn public_message(&self) -> String {
        match self {
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                "Internal server error".to_string()
            }
            AppError::NotFound(message)
            | AppError::ValidationError(message)
            | AppError::Conflict(message)
            | AppError::BadRequest(message) => message.clone(),
            AppError::ServiceUnavailable { message, .. } => message.clone(),
        }
    }
}

impl From<ListingError> for AppError {
    fn from(_: ListingError) -> Self {
        AppError::BadRequest("Listing arguments error".to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                AppError::ServiceUnavailable {
                    service: "database".to_string(),
                    message: "Service temporarily unavailable. Please try again later."
                        .to_string(),
                }
            }
            sqlx::Error::Database(database_error) => {
                if let Some(mapped) = map_database_error(
                    database_error.code().as_deref(),
                    database_error.constraint(),
                ) {
                    mapped
                } else {
                    AppError::DatabaseError(sqlx::Error::Database(database_error))
                }
            }
            other => AppError::DatabaseError(other),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        let mut messages = Vec::new();
        collect_validation_messages(None, &err, &mut messages);
        messages.sort();

        let message = match messages.as_slice() {
            [] => "Request validation failed".to_string(),
            [single] => single.clone(),
            _ => messages.join("; "),
        };
        AppError::ValidationError(message)
    }
}

fn collect_validation_messages(
    prefix: Option<String>,
    errors: &ValidationErrors,
    out: &mut Vec<String>,
) {
    for (field, kind) in errors.errors() {
        let path = match &prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(std::borrow::Cow::to_string)
                        .unwrap_or_else(|| format!("{path} is invalid"));
                    out.push(message);
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_validation_messages(Some(path), nested, out);
            }
            ValidationErrorsKind::List(nested_items) => {
                for (index, nested) in nested_items {
                    collect_validation_messages(Some(format!("{path}[{index}]")), nested, out);
                }
            }
        }
    }
}

fn map_database_error(code: Option<&str>, constraint: Option<&str>) -> Option<AppError> {
    match code {
        Some("23505") => Some(AppError::Conflict(
            conflict_message_from_constraint(constraint).to_string(),
        )),
        Some("23503") => Some(AppError::BadRequest(
            "referenced resource does not exist".to_string(),
        )),
        Some("23502") | Some("23514") | Some("22P02") => Some(AppError::ValidationError(
            "request violates validation rules".to_string(),
        )),
        Some("08001") | Some("08006") | Some("53300") => Some(AppError::ServiceUnavailable {
            service: "database".to_string(),
            message: "Service temporarily unavailable. Please try again later.".to_string(),
        }),
        _ => None,
    }
}

fn conflict_message_from_constraint(constraint: Option<&str>) -> &'static str {
    match constraint {
        Some("platforms_slug_key") => "platform slug already taken",
        Some("session_persons_pkey") => "person is already attached to this session",
        Some("session_locations_pkey") => "location is already attached to this session",
        Some("session_tags_pkey") => "tag is already attached to this session",
        _ => "resource already exists",
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::Value;
    use validator::Validate;

    #[actix_web::test]
    async fn error_response_uses_status_error_envelope() {
        let response = AppError::not_found("Event").error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body())
            .await
            .expect("response body should be readable");
        let json: Value =
            serde_json::from_slice(&body).expect("response body should be valid json");

        assert_eq!(json["status"], "error");
        assert_eq!(json["error"]["message"], "Event not found");
    }

    #[actix_web::test]
    async fn listing_error_maps_to_400_with_fixed_message() {
        let error: AppError = ListingError::ConflictingCursors.into();
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);

        let body = to_bytes(error.error_response().into_body())
            .await
            .expect("response body should be readable");
        let json: Value =
            serde_json::from_slice(&body).expect("response body should be valid json");
        assert_eq!(json["error"]["message"], "Listing arguments error");
    }

    #[test]
    fn pivot_not_found_is_bad_request_not_404() {
        let error = AppError::pivot_not_found("user");
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert!(matches!(
            error,
            AppError::BadRequest(message) if message == "Pivot user not found"
        ));
    }

    #[test]
    fn internal_errors_hide_details() {
        let error = AppError::InternalError(anyhow::anyhow!("sensitive details"));
        assert_eq!(error.public_message(), "Internal server error");

        let error = AppError::DatabaseError(sqlx::Error::RowNotFound);
        assert_eq!(error.public_message(), "Internal server error");
    }

    #[test]
    fn maps_unique_constraint_violation_to_conflict() {
        let mapped = map_database_error(Some("23505"), Some("platforms_slug_key"));
        assert!(matches!(
            mapped,
            Some(AppError::Conflict(message)) if message == "platform slug already taken"
        ));

        let mapped = map_database_error(Some("23505"), Some("something_else"));
        assert!(matches!(
            mapped,
            Some(AppError::Conflict(message)) if message == "resource already exists"
        ));
    }

    #[test]
    fn maps_foreign_key_violation_to_bad_request() {
        let mapped = map_database_error(Some("23503"), None);
        assert!(matches!(
            mapped,
            Some(AppError::BadRequest(message)) if message == "referenced resource does not exist"
        ));
    }

    #[test]
    fn maps_connection_errors_to_service_unavailable() {
        for code in ["08001", "08006", "53300"] {
            let mapped = map_database_error(Some(code), None);
            assert!(matches!(
                mapped,
                Some(AppError::ServiceUnavailable { service, .. }) if service == "database"
            ));
        }
    }

    #[test]
    fn unknown_sqlstate_is_not_mapped() {
        assert!(map_database_error(Some("99999"), None).is_none());
        assert!(map_database_error(None, None).is_none());
    }

    #[derive(Debug, Validate)]
    struct CreateValidation {
        #[validate(length(min = 1, message = "name must not be empty"))]
        name: String,
    }

    #[test]
    fn validation_errors_surface_field_message() {
        let error: AppError = CreateValidation {
            name: String::new(),
        }
        .validate()
        .expect_err("validation should fail")
        .into();

        assert!(matches!(
            error,
            AppError::ValidationError(message) if message == "name must not be empty"
        ));
    }
}
