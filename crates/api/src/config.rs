/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Identity provider admin API configuration.
    pub auth_admin: AuthAdminConfig,
}

/// Connection settings for the identity provider's admin API.
///
/// User management (invite, list, delete) is a thin passthrough to this
/// service; the console stores no credentials of its own.
#[derive(Debug, Clone)]
pub struct AuthAdminConfig {
    /// Base URL of the provider's auth endpoint, e.g. `http://localhost:9999/auth/v1`.
    pub base_url: String,
    /// Service-role key sent as a bearer token on admin calls.
    pub service_key: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                    |
    /// |--------------------------|----------------------------|
    /// | `HOST`                   | `0.0.0.0`                  |
    /// | `PORT`                   | `3000`                     |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                       |
    /// | `AUTH_ADMIN_URL`         | `http://localhost:9999`    |
    /// | `AUTH_ADMIN_SERVICE_KEY` | (empty)                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let auth_admin = AuthAdminConfig {
            base_url: std::env::var("AUTH_ADMIN_URL")
                .unwrap_or_else(|_| "http://localhost:9999".into()),
            service_key: std::env::var("AUTH_ADMIN_SERVICE_KEY").unwrap_or_default(),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            auth_admin,
        }
    }
}
