#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use atelier_api::auth_admin::{AdminUser, AuthAdminApi, AuthAdminError};
use atelier_api::config::{AuthAdminConfig, ServerConfig};
use atelier_api::router::build_app_router;
use atelier_api::state::AppState;
use atelier_pricing::{PgLinkStore, PriceFreezeEngine};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        auth_admin: AuthAdminConfig {
            base_url: "http://localhost:9999".to_string(),
            service_key: String::new(),
        },
    }
}

/// In-memory identity provider stub backing the `/admin/users` tests.
#[derive(Default)]
pub struct StubAuthAdmin {
    users: Mutex<Vec<AdminUser>>,
    next_id: AtomicU64,
}

#[async_trait]
impl AuthAdminApi for StubAuthAdmin {
    async fn invite_user(&self, email: &str) -> Result<AdminUser, AuthAdminError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let user = AdminUser {
            id: format!("stub-user-{id}"),
            email: Some(email.to_string()),
            created_at: None,
            last_sign_in_at: None,
        };
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<AdminUser>, AuthAdminError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), AuthAdminError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != user_id);
        if users.len() == before {
            return Err(AuthAdminError::Provider {
                status: 404,
                body: "User not found".to_string(),
            });
        }
        Ok(())
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and an in-memory identity provider stub.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let pricing = Arc::new(PriceFreezeEngine::new(PgLinkStore::new(pool.clone())));
    let auth_admin = Arc::new(StubAuthAdmin::default());

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        pricing,
        auth_admin,
    };

    build_app_router(state, &config)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a PUT request with a JSON body against the app.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a DELETE request against the app.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Convenience: expect a status and return the parsed JSON body.
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
