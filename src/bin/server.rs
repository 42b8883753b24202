//! Comment API server entry point.
//!
//! Startup order is explicit: logging, configuration, backend
//! construction, storage initialization, serve. Storage preparation (file
//! creation or table DDL) happens here and nowhere else; a failure aborts
//! startup instead of being logged and ignored.

use commentbox::comment::adapters::json_file::JsonFileCommentStore;
use commentbox::comment::adapters::postgres::{CommentPgPool, PostgresCommentStore};
use commentbox::comment::ports::CommentRepository;
use commentbox::comment::services::CommentService;
use commentbox::config::{Config, StorageConfig};
use commentbox::http;
use diesel::pg::PgConnection;
use diesel::r2d2::ConnectionManager;
use mockable::DefaultClock;
use std::sync::Arc;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Config::from_env()?;

    let repository: Arc<dyn CommentRepository> = match &config.storage {
        StorageConfig::JsonFile { path } => {
            tracing::info!("storage backend: JSON file at {}", path.display());
            Arc::new(JsonFileCommentStore::open(path)?)
        }
        StorageConfig::Postgres { database_url } => {
            tracing::info!("storage backend: PostgreSQL");
            let manager = ConnectionManager::<PgConnection>::new(database_url);
            let pool: CommentPgPool = CommentPgPool::builder().build(manager)?;
            Arc::new(PostgresCommentStore::new(pool))
        }
    };

    repository.initialize().await?;

    let service = CommentService::new(repository, Arc::new(DefaultClock));
    tracing::info!("listening on {}", config.listen_addr);
    http::serve(service, &config.listen_addr).await?;
    Ok(())
}
