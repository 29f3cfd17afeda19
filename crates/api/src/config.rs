use boilergen_core::{deletion, generation};

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the required secrets have sensible defaults suitable
/// for local development. In production, override via environment variables.
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
    /// JWT verification configuration (shared secret with the auth provider).
    pub jwt: JwtConfig,
    /// External generator service settings.
    pub generator: GeneratorConfig,
    /// Per-user generation rate limit.
    pub rate_limit: RateLimitConfig,
    /// Hours a project must age before it may be deleted (default: `24`).
    pub delete_cooldown_hours: i64,
}

/// Settings for the external generator collaborator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Generator endpoint URL (`BACKEND_GENERATOR_URL`, required).
    pub url: String,
    /// Request timeout in seconds (default: `30`).
    pub timeout_secs: u64,
    /// Additional attempts after a transport failure (default: `2`).
    pub retries: u32,
}

/// Sliding-window rate limit settings.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum generations per user per window (default: `3`).
    pub max_generations: i64,
    /// Window length in hours, measured back from request time (default: `24`).
    pub window_hours: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default       |
    /// |------------------------------|---------------|
    /// | `HOST`                       | `0.0.0.0`     |
    /// | `PORT`                       | `3000`        |
    /// | `CORS_ORIGINS`               | `http://localhost:3001` |
    /// | `REQUEST_TIMEOUT_SECS`       | `30`          |
    /// | `BACKEND_GENERATOR_URL`      | **required**  |
    /// | `GENERATOR_TIMEOUT_SECS`     | `30`          |
    /// | `GENERATOR_RETRIES`          | `2`           |
    /// | `RATE_LIMIT_MAX_GENERATIONS` | `3`           |
    /// | `RATE_LIMIT_WINDOW_HOURS`    | `24`          |
    /// | `DELETE_COOLDOWN_HOURS`      | `24`          |
    ///
    /// # Panics
    ///
    /// Panics on missing required variables or malformed values; startup
    /// misconfiguration should fail fast.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3001".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let generator = GeneratorConfig {
            url: std::env::var("BACKEND_GENERATOR_URL")
                .expect("BACKEND_GENERATOR_URL must be set in the environment"),
            timeout_secs: std::env::var("GENERATOR_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".into())
                .parse()
                .expect("GENERATOR_TIMEOUT_SECS must be a valid u64"),
            retries: std::env::var("GENERATOR_RETRIES")
                .unwrap_or_else(|_| "2".into())
                .parse()
                .expect("GENERATOR_RETRIES must be a valid u32"),
        };

        let rate_limit = RateLimitConfig {
            max_generations: std::env::var("RATE_LIMIT_MAX_GENERATIONS")
                .unwrap_or_else(|_| generation::DEFAULT_MAX_GENERATIONS.to_string())
                .parse()
                .expect("RATE_LIMIT_MAX_GENERATIONS must be a valid i64"),
            window_hours: std::env::var("RATE_LIMIT_WINDOW_HOURS")
                .unwrap_or_else(|_| generation::DEFAULT_WINDOW_HOURS.to_string())
                .parse()
                .expect("RATE_LIMIT_WINDOW_HOURS must be a valid i64"),
        };

        let delete_cooldown_hours: i64 = std::env::var("DELETE_COOLDOWN_HOURS")
            .unwrap_or_else(|_| deletion::DEFAULT_COOLDOWN_HOURS.to_string())
            .parse()
            .expect("DELETE_COOLDOWN_HOURS must be a valid i64");

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            generator,
            rate_limit,
            delete_cooldown_hours,
        }
    }
}
