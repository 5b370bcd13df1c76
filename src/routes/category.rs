use axum::{Json, extract::State, http::StatusCode};
use laptop_review_catalog::{Category, CategoryInput};
use serde::Serialize;

use super::{AppState, MessageResponse};
use crate::{
    error::AppError,
    extract::{AppJson, AppPath},
    middleware::AuthUser,
};

#[derive(Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<Category>,
}

#[derive(Serialize)]
pub struct CategoryResponse {
    pub category: Category,
}

#[derive(Serialize)]
pub struct CategoryMessageResponse {
    pub message: &'static str,
    pub category: Category,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<CategoryListResponse>, AppError> {
    let categories = state.catalog_command.category.list().await?;

    Ok(Json(CategoryListResponse { categories }))
}

pub async fn show(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<CategoryResponse>, AppError> {
    let Some(category) = state.catalog_command.category.find(id).await? else {
        return Err(AppError::not_found("category not found"));
    };

    Ok(Json(CategoryResponse { category }))
}

pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    AppJson(input): AppJson<CategoryInput>,
) -> Result<(StatusCode, Json<CategoryMessageResponse>), AppError> {
    let category = state.catalog_command.category.create(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(CategoryMessageResponse {
            message: "Category created successfully",
            category,
        }),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    AppPath(id): AppPath<i64>,
    AppJson(input): AppJson<CategoryInput>,
) -> Result<Json<CategoryMessageResponse>, AppError> {
    let category = state.catalog_command.category.update(id, input).await?;

    Ok(Json(CategoryMessageResponse {
        message: "Category updated successfully",
        category,
    }))
}

pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    AppPath(id): AppPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.catalog_command.category.delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Category deleted successfully",
    }))
}
