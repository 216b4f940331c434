use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;
use serde_json::json;

use crate::Pic2MapError;

/// Error returned by HTTP handlers.
///
/// Every failure is internal: the details are logged and the client gets a
/// JSON body with a generic message.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Core(#[from] Pic2MapError),
}

pub type ServerResult<T> = std::result::Result<T, ServerError>;

impl From<sqlx::Error> for ServerError {
    fn from(err: sqlx::Error) -> Self {
        Self::Core(err.into())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let code = match &self {
            ServerError::Core(Pic2MapError::Database(_)) => "DATABASE_ERROR",
            ServerError::Core(_) => "INTERNAL_ERROR",
        };
        error!("Request failed: {}", self);

        let body = json!({
            "error": "An internal error occurred",
            "code": code,
        });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response() {
        let response =
            ServerError::from(Pic2MapError::Render("boom".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_database_error_response() {
        let response = ServerError::from(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
