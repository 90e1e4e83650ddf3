//! member-server: conference membership records over HTTP/JSON
//!
//! - `api`: axum router and handlers
//! - `db`: repository trait with PostgreSQL and in-process stores
//! - `config` / `state`: startup configuration and the injected store handle

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod state;

pub use api::create_router;
pub use config::Config;
pub use state::AppState;
