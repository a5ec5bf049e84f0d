use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use skysift_advisor::AdvisorError;
use skysift_search::SearchError;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    UpstreamAuthError(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::UpstreamAuthError(msg) => {
                tracing::error!("Upstream auth failure: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "Flight supplier authentication failed".to_string(),
                )
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::InvalidMonths(_) => AppError::ValidationError(err.to_string()),
            SearchError::NoFlightsFound => AppError::NotFoundError(err.to_string()),
            SearchError::Auth(auth) => AppError::UpstreamAuthError(auth.to_string()),
            SearchError::Duration(_) | SearchError::Internal(_) => {
                AppError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<AdvisorError> for AppError {
    fn from(err: AdvisorError) -> Self {
        match err {
            AdvisorError::InvalidBudget => AppError::ValidationError(err.to_string()),
        }
    }
}
