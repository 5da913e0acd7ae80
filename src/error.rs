use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

pub const NO_MOVIES_FOUND: &str = "No movies found.";
pub const MOVIE_NOT_FOUND: &str = "Movie with the given ID was not found.";

/// A single rejected input, located by where it came from (`query`, `path`,
/// or a stored field) and which field it was.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{location}.{field}: {message}")]
pub struct ValidationError {
    pub location: &'static str,
    pub field: &'static str,
    pub message: String,
    pub kind: &'static str,
}

impl ValidationError {
    pub fn new(
        location: &'static str,
        field: &'static str,
        kind: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self { location, field, message: message.into(), kind }
    }

    fn detail(&self) -> serde_json::Value {
        json!({
            "loc": [self.location, self.field],
            "msg": self.message,
            "type": self.kind,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(ValidationError),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": [err.detail()] })),
            )
                .into_response(),
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "detail": message }))).into_response()
            }
            AppError::Database(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "Internal server error." })),
                )
                    .into_response()
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
