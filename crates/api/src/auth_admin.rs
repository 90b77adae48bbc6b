//! Identity provider admin API client.
//!
//! The console does not manage credentials itself: inviting, listing, and
//! deleting users is a thin passthrough to the hosted auth service's admin
//! endpoints. [`AuthAdminApi`] is the capability handlers depend on;
//! [`HttpAuthAdmin`] is the production implementation.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// HTTP request timeout for a single admin API call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A user record as returned by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    /// Provider-assigned user ID (an opaque string, typically a UUID).
    pub id: String,
    pub email: Option<String>,
    pub created_at: Option<String>,
    pub last_sign_in_at: Option<String>,
}

/// Errors from the identity provider admin API layer.
#[derive(Debug, thiserror::Error)]
pub enum AuthAdminError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Identity provider returned HTTP {status}: {body}")]
    Provider {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// User-management capability delegated to the identity provider.
#[async_trait]
pub trait AuthAdminApi: Send + Sync {
    /// Invite a new user by email. The provider sends the invite mail.
    async fn invite_user(&self, email: &str) -> Result<AdminUser, AuthAdminError>;

    /// List all users known to the provider.
    async fn list_users(&self) -> Result<Vec<AdminUser>, AuthAdminError>;

    /// Delete a user by provider ID.
    async fn delete_user(&self, user_id: &str) -> Result<(), AuthAdminError>;
}

/// Production implementation over the provider's admin HTTP API.
pub struct HttpAuthAdmin {
    client: reqwest::Client,
    base_url: String,
    service_key: String,
}

/// Response shape of the provider's `GET /admin/users` endpoint.
#[derive(Debug, Deserialize)]
struct ListUsersResponse {
    users: Vec<AdminUser>,
}

impl HttpAuthAdmin {
    /// Create a client for the provider's admin API.
    ///
    /// * `base_url`    - auth endpoint base, e.g. `http://localhost:9999/auth/v1`.
    /// * `service_key` - service-role key sent as a bearer token.
    pub fn new(base_url: String, service_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            base_url,
            service_key,
        }
    }

    /// Attach the service-role credentials to a request.
    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
    }

    /// Surface a non-2xx response as [`AuthAdminError::Provider`].
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AuthAdminError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(AuthAdminError::Provider {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl AuthAdminApi for HttpAuthAdmin {
    async fn invite_user(&self, email: &str) -> Result<AdminUser, AuthAdminError> {
        let body = serde_json::json!({ "email": email });
        let response = self
            .authed(self.client.post(format!("{}/invite", self.base_url)))
            .json(&body)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn list_users(&self) -> Result<Vec<AdminUser>, AuthAdminError> {
        let response = self
            .authed(self.client.get(format!("{}/admin/users", self.base_url)))
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        let parsed: ListUsersResponse = response.json().await?;
        Ok(parsed.users)
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), AuthAdminError> {
        let response = self
            .authed(
                self.client
                    .delete(format!("{}/admin/users/{}", self.base_url, user_id)),
            )
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }
}
