//! Application state - shared across all handlers.

use std::sync::Arc;

use posts_core::ports::PostRepository;
use posts_infra::InMemoryPostRepository;

use crate::config::AppConfig;

#[cfg(feature = "postgres")]
use posts_infra::PostgresPostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Wrap an already-built post store.
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Build the application state with the store the configuration asks for.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        let posts: Arc<dyn PostRepository> = {
            if let Some(db_config) = &config.database {
                match posts_infra::database::connect(db_config).await {
                    Ok(conn) => Arc::new(PostgresPostRepository::new(conn)),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        in_memory(config)
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                in_memory(config)
            }
        };

        #[cfg(not(feature = "postgres"))]
        let posts: Arc<dyn PostRepository> = {
            if config.database.is_some() {
                tracing::warn!("DATABASE_URL ignored - built without postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repository");
            in_memory(config)
        };

        tracing::info!("Application state initialized");

        Self::with_repository(posts)
    }
}

fn in_memory(config: &AppConfig) -> Arc<dyn PostRepository> {
    if config.seed_sample_posts {
        tracing::info!("Seeding in-memory store with sample posts");
        Arc::new(InMemoryPostRepository::with_sample_posts())
    } else {
        Arc::new(InMemoryPostRepository::new())
    }
}
