use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, routes::AppState};

/// Identity of the caller, inserted by [`require_auth`].
#[derive(Clone, Copy, Debug)]
pub struct AuthUser {
    pub id: i64,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .copied()
            .ok_or(AppError::Unauthorized("authorization header is required"))
    }
}

/// Extracts the token from `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Err(AppError::Unauthorized("authorization header is required"));
    };

    let value = value
        .to_str()
        .map_err(|_| AppError::Unauthorized("invalid or missing bearer token"))?;

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Ok(token),
        _ => Err(AppError::Unauthorized("invalid or missing bearer token")),
    }
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(req.headers())?;

    let id = match state.keys.verify(token) {
        Ok(id) => id,
        Err(e) => {
            tracing::debug!(error = %e, "rejected bearer token");
            return Err(AppError::Unauthorized("invalid or expired token"));
        }
    };

    req.extensions_mut().insert(AuthUser { id });

    Ok(next.run(req).await)
}
