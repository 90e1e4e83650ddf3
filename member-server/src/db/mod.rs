//! Database access layer
//!
//! Handlers only see [`MemberRepository`]; the concrete store is chosen once
//! at startup and shared through `AppState`.

pub mod memory;
pub mod postgres;

pub use memory::MemoryMemberRepository;
pub use postgres::PgMemberRepository;

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use shared::models::{Member, MemberUpdate, NewMember};
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use thiserror::Error;

use crate::config::Config;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    /// A unique constraint rejected the write (the members table only has one: email)
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepoError::Duplicate(db_err.message().to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// CRUD operations over the members table
///
/// Every method is a single statement committed on its own.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Insert a member; both timestamps are set to the same instant.
    async fn create(&self, data: &NewMember) -> RepoResult<Member>;

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>>;

    /// Exact (case-sensitive) email match
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>>;

    /// Offset/limit page ordered by id
    async fn list(&self, skip: i64, limit: i64) -> RepoResult<Vec<Member>>;

    /// Apply the supplied fields and refresh `updated_at`. `None` if the id is unknown.
    async fn update(&self, id: i64, data: &MemberUpdate) -> RepoResult<Option<Member>>;

    /// Hard delete. `false` if the id is unknown.
    async fn delete(&self, id: i64) -> RepoResult<bool>;

    /// Connectivity probe
    async fn ping(&self) -> RepoResult<()>;
}

/// Hosted PostgreSQL providers that reject plaintext connections
const TLS_REQUIRED_HOSTS: &[&str] = &["supabase", "azure"];

fn requires_tls_upgrade(database_url: &str) -> bool {
    !database_url.contains("sslmode=")
        && TLS_REQUIRED_HOSTS
            .iter()
            .any(|host| database_url.contains(host))
}

/// Connect the PostgreSQL pool and apply pending migrations
pub async fn connect(config: &Config) -> Result<PgPool, BoxError> {
    let mut options = PgConnectOptions::from_str(&config.database_url)?;
    if requires_tls_upgrade(&config.database_url) {
        options = options.ssl_mode(PgSslMode::Require);
    }

    let pool = PgPoolOptions::new()
        .min_connections(config.db_pool_size)
        .max_connections(config.db_max_connections())
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
        .test_before_acquire(true)
        .connect_with(options)
        .await?;

    tracing::info!(
        pool_size = config.db_pool_size,
        max_connections = config.db_max_connections(),
        "Connected to PostgreSQL"
    );

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
