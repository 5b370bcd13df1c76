use axum::{Json, extract::State, http::StatusCode};
use laptop_review_review::{CommentInput, CommentWithAuthor};
use serde::Serialize;

use super::{AppState, MessageResponse};
use crate::{
    error::AppError,
    extract::{AppJson, AppPath},
    middleware::AuthUser,
};

#[derive(Serialize)]
pub struct CommentListResponse {
    pub comments: Vec<CommentWithAuthor>,
}

#[derive(Serialize)]
pub struct CommentResponse {
    pub comment: CommentWithAuthor,
}

#[derive(Serialize)]
pub struct CommentMessageResponse {
    pub message: &'static str,
    pub comment: CommentWithAuthor,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<CommentListResponse>, AppError> {
    let comments = state.review_command.list_with_author(None).await?;

    Ok(Json(CommentListResponse { comments }))
}

pub async fn show(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<CommentResponse>, AppError> {
    let Some(comment) = state.review_command.find_with_author(id).await? else {
        return Err(AppError::not_found("comment not found"));
    };

    Ok(Json(CommentResponse { comment }))
}

pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<CommentInput>,
) -> Result<(StatusCode, Json<CommentMessageResponse>), AppError> {
    let comment = state.review_command.create_comment(user.id, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(CommentMessageResponse {
            message: "Comment created successfully",
            comment,
        }),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<i64>,
    AppJson(input): AppJson<CommentInput>,
) -> Result<Json<CommentMessageResponse>, AppError> {
    let comment = state
        .review_command
        .update_comment(user.id, id, input)
        .await?;

    Ok(Json(CommentMessageResponse {
        message: "Comment updated successfully",
        comment,
    }))
}

pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.review_command.delete_comment(user.id, id).await?;

    Ok(Json(MessageResponse {
        message: "Comment deleted successfully",
    }))
}
