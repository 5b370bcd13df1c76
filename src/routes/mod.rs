use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use laptop_review_shared::State;
use laptop_review_user::JwtKeys;
use serde::Serialize;
use serde_json::json;
use sqlx::SqlitePool;

use crate::middleware::require_auth;

mod auth;
mod brand;
mod category;
mod comment;
mod health;
mod laptop;
mod profile;

#[derive(Clone)]
pub struct AppState {
    pub user_command: laptop_review_user::Command,
    pub catalog_command: laptop_review_catalog::Command,
    pub review_command: laptop_review_review::Command,
    pub keys: JwtKeys,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(read_db: SqlitePool, write_db: SqlitePool, keys: JwtKeys) -> Self {
        let state = State::new(read_db.clone(), write_db);

        Self {
            user_command: laptop_review_user::Command::new(state.clone(), keys.clone()),
            catalog_command: laptop_review_catalog::Command::new(state.clone()),
            review_command: laptop_review_review::Command::new(state),
            keys,
            pool: read_db,
        }
    }
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}

pub fn router(app_state: AppState) -> Router {
    let auth = axum::middleware::from_fn_with_state(app_state.clone(), require_auth);

    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route(
            "/auth/change-password",
            put(auth::change_password).route_layer(auth.clone()),
        )
        .route("/api/profiles", get(profile::find_by_user))
        .route(
            "/api/profile",
            get(profile::show)
                .post(profile::create)
                .put(profile::update)
                .route_layer(auth.clone()),
        )
        .route("/api/categories", get(category::list))
        .route(
            "/api/category",
            post(category::create).route_layer(auth.clone()),
        )
        .route(
            "/api/category/{id}",
            get(category::show).merge(
                put(category::update)
                    .delete(category::delete)
                    .route_layer(auth.clone()),
            ),
        )
        .route("/api/brands", get(brand::list))
        .route("/api/brand", post(brand::create).route_layer(auth.clone()))
        .route(
            "/api/brand/{id}",
            get(brand::show).merge(
                put(brand::update)
                    .delete(brand::delete)
                    .route_layer(auth.clone()),
            ),
        )
        .route("/api/laptops", get(laptop::list))
        .route("/api/laptop", post(laptop::create).route_layer(auth.clone()))
        .route(
            "/api/laptop/{id}",
            get(laptop::show).merge(
                put(laptop::update)
                    .delete(laptop::delete)
                    .route_layer(auth.clone()),
            ),
        )
        .route("/api/comments", get(comment::list))
        .route(
            "/api/comment",
            post(comment::create).route_layer(auth.clone()),
        )
        .route(
            "/api/comment/{id}",
            get(comment::show).merge(
                put(comment::update)
                    .delete(comment::delete)
                    .route_layer(auth),
            ),
        )
        .fallback(fallback)
        .with_state(app_state)
}
