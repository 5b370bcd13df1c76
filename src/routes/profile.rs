use axum::{Json, extract::State, http::StatusCode};
use laptop_review_user::{Profile, ProfileInput};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::{
    error::AppError,
    extract::{AppJson, AppQuery},
    middleware::AuthUser,
};

#[derive(Deserialize)]
pub struct ProfileQuery {
    pub user_id: i64,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub profile: Profile,
}

#[derive(Serialize)]
pub struct ProfileMessageResponse {
    pub message: &'static str,
    pub profile: Profile,
}

async fn load(state: &AppState, user_id: i64) -> Result<Profile, AppError> {
    match state
        .user_command
        .profile
        .find_profile_by_user(user_id)
        .await?
    {
        Some(profile) => Ok(profile),
        None => Err(AppError::not_found("profile not found")),
    }
}

pub async fn find_by_user(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ProfileQuery>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = load(&state, query.user_id).await?;

    Ok(Json(ProfileResponse { profile }))
}

pub async fn show(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = load(&state, user.id).await?;

    Ok(Json(ProfileResponse { profile }))
}

pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<ProfileInput>,
) -> Result<(StatusCode, Json<ProfileMessageResponse>), AppError> {
    let profile = state
        .user_command
        .profile
        .create_profile(user.id, input)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ProfileMessageResponse {
            message: "Profile created successfully",
            profile,
        }),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<ProfileInput>,
) -> Result<Json<ProfileMessageResponse>, AppError> {
    let profile = state
        .user_command
        .profile
        .update_profile(user.id, input)
        .await?;

    Ok(Json(ProfileMessageResponse {
        message: "Profile updated successfully",
        profile,
    }))
}
