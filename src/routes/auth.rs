use axum::{Json, extract::State, http::StatusCode};
use laptop_review_user::{ChangePasswordInput, LoginInput, RegisterInput, User};
use serde::Serialize;

use super::{AppState, MessageResponse};
use crate::{error::AppError, extract::AppJson, middleware::AuthUser};

#[derive(Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user: User,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
}

pub async fn register(
    State(state): State<AppState>,
    AppJson(input): AppJson<RegisterInput>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let user = state.user_command.register(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "registration success",
            user,
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginInput>,
) -> Result<Json<LoginResponse>, AppError> {
    let token = state.user_command.login(input).await?;

    Ok(Json(LoginResponse {
        message: "login success",
        token,
    }))
}

pub async fn change_password(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<ChangePasswordInput>,
) -> Result<Json<MessageResponse>, AppError> {
    state.user_command.change_password(user.id, input).await?;

    Ok(Json(MessageResponse {
        message: "Password updated successfully",
    }))
}
