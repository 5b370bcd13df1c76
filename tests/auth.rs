use axum::http::{Method, StatusCode};
use serde_json::json;

mod helpers;

#[tokio::test]
async fn test_health_and_fallback() -> anyhow::Result<()> {
    let app = helpers::setup_test_app().await?;

    let (status, body) = app.get("/health").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = app.get("/ready").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");

    let (status, body) = app.get("/api/unknown").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not found");

    Ok(())
}

#[tokio::test]
async fn test_register_and_login() -> anyhow::Result<()> {
    let app = helpers::setup_test_app().await?;

    let (status, body) = app
        .send(
            Method::POST,
            "/register",
            None,
            Some(json!({
                "username": "john",
                "email": "john@laptop-review.localhost",
                "password": "my_password",
            })),
        )
        .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "registration success");
    assert_eq!(body["user"]["username"], "john");
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());

    let (status, body) = app
        .send(
            Method::POST,
            "/register",
            None,
            Some(json!({
                "username": "john",
                "email": "other@laptop-review.localhost",
                "password": "my_password",
            })),
        )
        .await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "username or email already registered");

    let (status, body) = app
        .send(
            Method::POST,
            "/login",
            None,
            Some(json!({ "username": "john", "password": "my_password" })),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "login success");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));

    let (status, body) = app
        .send(
            Method::POST,
            "/login",
            None,
            Some(json!({ "username": "john", "password": "wrong_password" })),
        )
        .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "username or password is incorrect");

    Ok(())
}

#[tokio::test]
async fn test_register_rejects_invalid_input() -> anyhow::Result<()> {
    let app = helpers::setup_test_app().await?;

    let (status, _) = app
        .send(
            Method::POST,
            "/register",
            None,
            Some(json!({
                "username": "john",
                "email": "not-an-email",
                "password": "my_password",
            })),
        )
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .send(
            Method::POST,
            "/register",
            None,
            Some(json!({ "username": "john" })),
        )
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_protected_route_requires_valid_token() -> anyhow::Result<()> {
    let app = helpers::setup_test_app().await?;
    let body = json!({ "name": "Dell" });

    let (status, res) = app
        .send(Method::POST, "/api/brand", None, Some(body.clone()))
        .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(res["error"], "authorization header is required");

    let (status, res) = app
        .send(Method::POST, "/api/brand", Some("not.a.token"), Some(body))
        .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(res["error"], "invalid or expired token");

    Ok(())
}

#[tokio::test]
async fn test_change_password() -> anyhow::Result<()> {
    let app = helpers::setup_test_app().await?;
    let (_, token) = app.signup("john").await?;

    let (status, body) = app
        .send(
            Method::PUT,
            "/auth/change-password",
            Some(&token),
            Some(json!({
                "current_password": "wrong_password",
                "new_password": "new_password",
            })),
        )
        .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid current password");

    let (status, body) = app
        .send(
            Method::PUT,
            "/auth/change-password",
            Some(&token),
            Some(json!({
                "current_password": "my_password",
                "new_password": "new_password",
            })),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Password updated successfully");

    let (status, _) = app
        .send(
            Method::POST,
            "/login",
            None,
            Some(json!({ "username": "john", "password": "new_password" })),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_profile_lifecycle() -> anyhow::Result<()> {
    let app = helpers::setup_test_app().await?;
    let (john, token) = app.signup("john").await?;

    let (status, _) = app
        .send(Method::GET, "/api/profile", Some(&token), None)
        .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let input = json!({ "fullname": "John Doe", "bio": "Reviews ultrabooks" });
    let (status, body) = app
        .send(Method::POST, "/api/profile", Some(&token), Some(input.clone()))
        .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["profile"]["user_id"], john);

    let (status, _) = app
        .send(Method::POST, "/api/profile", Some(&token), Some(input))
        .await?;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = app
        .send(
            Method::PUT,
            "/api/profile",
            Some(&token),
            Some(json!({ "fullname": "John D.", "bio": "Gaming laptops" })),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["fullname"], "John D.");

    let (status, body) = app.get(&format!("/api/profiles?user_id={john}")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["bio"], "Gaming laptops");

    let (status, _) = app.get("/api/profiles?user_id=abc").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}
