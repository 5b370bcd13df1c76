use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use laptop_review_shared::Error;
use serde_json::json;

/// Every failure leaves the service as `{"error": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] Error),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(&'static str),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::Domain(Error::NotFound(message.into()))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Domain(Error::Validate(_) | Error::Invalid(_)) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Domain(Error::Unauthorized(_)) | AppError::Unauthorized(_) => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Domain(Error::Forbidden) => StatusCode::FORBIDDEN,
            AppError::Domain(Error::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Domain(Error::Conflict(_)) => StatusCode::CONFLICT,
            AppError::Domain(Error::Unknown(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
            "internal server error".to_owned()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                AppError::Domain(Error::Invalid("bad".to_owned())),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::BadRequest("bad json".to_owned()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Domain(Error::Unauthorized("no".to_owned())),
                StatusCode::UNAUTHORIZED,
            ),
            (AppError::Domain(Error::Forbidden), StatusCode::FORBIDDEN),
            (
                AppError::Domain(Error::NotFound("missing".to_owned())),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::Domain(Error::Conflict("dup".to_owned())),
                StatusCode::CONFLICT,
            ),
            (
                AppError::Domain(Error::Unknown(anyhow::anyhow!("disk full"))),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.status(), status);
            assert_eq!(err.into_response().status(), status);
        }
    }
}
