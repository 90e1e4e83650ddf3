//! Shared types for the membership service
//!
//! Error codes, the error response body and the member payload models used by
//! the server crate and its tests.

pub mod error;
pub mod models;
pub mod util;
