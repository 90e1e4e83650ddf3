//! Application state

use std::sync::Arc;

use crate::config::Config;
use crate::db::{self, MemberRepository, MemoryMemberRepository, PgMemberRepository};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state, built once at startup and cloned per request
#[derive(Clone)]
pub struct AppState {
    /// Member store (PostgreSQL pool or in-process table)
    pub members: Arc<dyn MemberRepository>,
}

impl AppState {
    /// Create a new AppState from configuration
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        if config.uses_memory_store() {
            tracing::warn!("Using in-process member store; data is lost on exit");
            return Ok(Self::with_repository(MemoryMemberRepository::new()));
        }

        let pool = db::connect(config).await?;
        Ok(Self::with_repository(PgMemberRepository::new(pool)))
    }

    pub fn with_repository(repo: impl MemberRepository + 'static) -> Self {
        Self {
            members: Arc::new(repo),
        }
    }
}
