//! Integration tests for the `/admin/users` passthrough endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, expect_json, get, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn invite_then_list_users(pool: PgPool) {
    let app = common::build_test_app(pool);

    let user = expect_json(
        post_json(
            app.clone(),
            "/api/v1/admin/users",
            serde_json::json!({ "email": "nouveau@example.com" }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(user["email"], "nouveau@example.com");
    assert!(user["id"].is_string());

    let response = get(app, "/api/v1/admin/users").await;
    assert_eq!(response.status(), StatusCode::OK);
    let users = body_json(response).await;
    assert_eq!(users.as_array().unwrap().len(), 1);
    assert_eq!(users[0]["email"], "nouveau@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invite_rejects_invalid_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    for email in ["", "   ", "not-an-email"] {
        let json = expect_json(
            post_json(
                app.clone(),
                "/api/v1/admin/users",
                serde_json::json!({ "email": email }),
            )
            .await,
            StatusCode::BAD_REQUEST,
        )
        .await;
        assert_eq!(json["code"], "BAD_REQUEST");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invited_email_is_trimmed(pool: PgPool) {
    let app = common::build_test_app(pool);

    let user = expect_json(
        post_json(
            app.clone(),
            "/api/v1/admin/users",
            serde_json::json!({ "email": "  padded@example.com  " }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(user["email"], "padded@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_user_removes_it(pool: PgPool) {
    let app = common::build_test_app(pool);

    let user = expect_json(
        post_json(
            app.clone(),
            "/api/v1/admin/users",
            serde_json::json!({ "email": "ephemere@example.com" }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let id = user["id"].as_str().unwrap().to_string();

    let response = delete(app.clone(), &format!("/api/v1/admin/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let users = body_json(get(app, "/api/v1/admin/users").await).await;
    assert!(users.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_an_unknown_user_maps_the_provider_error(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = delete(app, "/api/v1/admin/users/no-such-user").await;

    // The stub provider answers 404; a client-side provider status passes
    // through instead of being flattened to 502.
    let json = expect_json(response, StatusCode::NOT_FOUND).await;
    assert_eq!(json["code"], "AUTH_PROVIDER_ERROR");
}
