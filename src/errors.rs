use std::borrow::Cow;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;
use serde::Serialize;
use validator::ValidationErrors;

#[derive(Debug, Display)]
pub enum AppError {
    #[display("Validation failed")]
    ValidationError(Vec<FieldError>),

    #[display("Not found: {_0}")]
    NotFound(String),

    #[display("Conflict: {_0}")]
    Conflict(String),

    #[display("Internal server error: {_0}")]
    InternalError(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(errors) => {
                serde_json::json!({
                    "error": "Validation failed",
                    "details": errors
                })
            }
            _ => {
                serde_json::json!({"error": self.to_string()})
            }
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(|e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();

        AppError::ValidationError(field_errors)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => {
                AppError::NotFound("Record not found".into())
            }
            sqlx::Error::Database(e) if e.code() == Some(Cow::Borrowed("23505")) => {
                AppError::Conflict("Database conflict occurred".into())
            }
            sqlx::Error::Database(e) if e.code() == Some(Cow::Borrowed("23503")) => {
                AppError::Conflict("Foreign key violation".into())
            }
            _ => AppError::InternalError(format!("Database error: {}", err))
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
