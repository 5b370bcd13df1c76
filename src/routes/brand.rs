use axum::{Json, extract::State, http::StatusCode};
use laptop_review_catalog::{Brand, BrandInput};
use serde::Serialize;

use super::{AppState, MessageResponse};
use crate::{
    error::AppError,
    extract::{AppJson, AppPath},
    middleware::AuthUser,
};

#[derive(Serialize)]
pub struct BrandListResponse {
    pub brands: Vec<Brand>,
}

#[derive(Serialize)]
pub struct BrandResponse {
    pub brand: Brand,
}

#[derive(Serialize)]
pub struct BrandMessageResponse {
    pub message: &'static str,
    pub brand: Brand,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<BrandListResponse>, AppError> {
    let brands = state.catalog_command.brand.list().await?;

    Ok(Json(BrandListResponse { brands }))
}

pub async fn show(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<BrandResponse>, AppError> {
    let Some(brand) = state.catalog_command.brand.find(id).await? else {
        return Err(AppError::not_found("brand not found"));
    };

    Ok(Json(BrandResponse { brand }))
}

pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    AppJson(input): AppJson<BrandInput>,
) -> Result<(StatusCode, Json<BrandMessageResponse>), AppError> {
    let brand = state.catalog_command.brand.create(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(BrandMessageResponse {
            message: "Brand created successfully",
            brand,
        }),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    AppPath(id): AppPath<i64>,
    AppJson(input): AppJson<BrandInput>,
) -> Result<Json<BrandMessageResponse>, AppError> {
    let brand = state.catalog_command.brand.update(id, input).await?;

    Ok(Json(BrandMessageResponse {
        message: "Brand updated successfully",
        brand,
    }))
}

pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    AppPath(id): AppPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.catalog_command.brand.delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Brand deleted successfully",
    }))
}
