use axum::{Json, extract::State, http::StatusCode};
use laptop_review_catalog::{Laptop, LaptopInput};
use serde::Serialize;

use super::{AppState, MessageResponse};
use crate::{
    error::AppError,
    extract::{AppJson, AppPath},
    middleware::AuthUser,
    query::{self, LaptopDetail},
};

#[derive(Serialize)]
pub struct LaptopListResponse {
    pub laptops: Vec<LaptopDetail>,
}

#[derive(Serialize)]
pub struct LaptopResponse {
    pub laptop: LaptopDetail,
}

#[derive(Serialize)]
pub struct LaptopMessageResponse {
    pub message: &'static str,
    pub laptop: Laptop,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<LaptopListResponse>, AppError> {
    let laptops = query::list_laptops(&state.catalog_command, &state.review_command).await?;

    Ok(Json(LaptopListResponse { laptops }))
}

pub async fn show(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<LaptopResponse>, AppError> {
    let Some(laptop) = query::find_laptop(&state.catalog_command, &state.review_command, id).await?
    else {
        return Err(AppError::not_found("laptop not found"));
    };

    Ok(Json(LaptopResponse { laptop }))
}

pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    AppJson(input): AppJson<LaptopInput>,
) -> Result<(StatusCode, Json<LaptopMessageResponse>), AppError> {
    let laptop = state.catalog_command.laptop.create(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(LaptopMessageResponse {
            message: "Laptop created successfully",
            laptop,
        }),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    AppPath(id): AppPath<i64>,
    AppJson(input): AppJson<LaptopInput>,
) -> Result<Json<LaptopMessageResponse>, AppError> {
    let laptop = state.catalog_command.laptop.update(id, input).await?;

    Ok(Json(LaptopMessageResponse {
        message: "Laptop updated successfully",
        laptop,
    }))
}

pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    AppPath(id): AppPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.catalog_command.laptop.delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Laptop deleted successfully",
    }))
}
