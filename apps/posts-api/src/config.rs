//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use posts_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    /// Start the in-memory store with sample posts.
    pub seed_sample_posts: bool,
    pub server: ServerTimeouts,
}

/// Server-wide request timeouts and the shutdown grace period.
#[derive(Debug, Clone)]
pub struct ServerTimeouts {
    pub client_request: Duration,
    pub keep_alive: Duration,
    pub shutdown_grace: Duration,
}

impl Default for ServerTimeouts {
    fn default() -> Self {
        Self {
            client_request: Duration::from_secs(1),
            keep_alive: Duration::from_secs(120),
            shutdown_grace: Duration::from_secs(30),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(10),
            min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(1),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(9090),
            database,
            seed_sample_posts: env::var("SEED_SAMPLE_POSTS")
                .map(|v| is_truthy(&v))
                .unwrap_or(false),
            server: ServerTimeouts::default(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
