#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use laptop_review::{AppState, router};
use laptop_review_user::JwtKeys;
use serde_json::{Value, json};
use sqlx_migrator::{Migrate, Plan};
use temp_dir::TempDir;
use tower::ServiceExt;

pub const SECRET: &str = "test_secret_key_minimum_32_characters_long";

pub struct TestApp {
    pub router: Router,
    _dir: TempDir,
}

pub async fn setup_test_app() -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let url = format!("sqlite:{}", path.to_string_lossy());

    let pool = laptop_review::db::create_pool(&url, 1).await?;
    let mut conn = pool.acquire().await?;
    laptop_review_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;
    drop(conn);

    let state = AppState::new(pool.clone(), pool, JwtKeys::new(SECRET, 3600));

    Ok(TestApp {
        router: router(state),
        _dir: dir,
    })
}

impl TestApp {
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> anyhow::Result<(StatusCode, Value)> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok((status, value))
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
        self.send(Method::GET, uri, None, None).await
    }

    /// Registers `name` and returns `(user_id, token)`.
    pub async fn signup(&self, name: &str) -> anyhow::Result<(i64, String)> {
        let (status, body) = self
            .send(
                Method::POST,
                "/register",
                None,
                Some(json!({
                    "username": name,
                    "email": format!("{name}@laptop-review.localhost"),
                    "password": "my_password",
                })),
            )
            .await?;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        let id = body["user"]["id"].as_i64().unwrap_or_default();

        let (status, body) = self
            .send(
                Method::POST,
                "/login",
                None,
                Some(json!({ "username": name, "password": "my_password" })),
            )
            .await?;
        assert_eq!(status, StatusCode::OK, "{body}");
        let token = body["token"].as_str().unwrap_or_default().to_owned();

        Ok((id, token))
    }

    /// Creates a brand, a category and one laptop, returning the laptop id.
    pub async fn create_laptop(&self, token: &str, name: &str) -> anyhow::Result<i64> {
        let (_, brand) = self
            .send(
                Method::POST,
                "/api/brand",
                Some(token),
                Some(json!({ "name": "Lenovo" })),
            )
            .await?;
        let (_, category) = self
            .send(
                Method::POST,
                "/api/category",
                Some(token),
                Some(json!({ "name": "Business" })),
            )
            .await?;

        let (status, body) = self
            .send(
                Method::POST,
                "/api/laptop",
                Some(token),
                Some(json!({
                    "name": name,
                    "release_year": 2023,
                    "spec": "i7, 16GB",
                    "price": 1499.0,
                    "brand_id": brand["brand"]["id"],
                    "category_id": category["category"]["id"],
                })),
            )
            .await?;
        assert_eq!(status, StatusCode::CREATED, "{body}");

        Ok(body["laptop"]["id"].as_i64().unwrap_or_default())
    }
}
