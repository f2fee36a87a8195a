//! Shared utilities, configuration, and error handling for Curio
//!
//! This crate provides common functionality used across the Curio workspace:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP mapping
//! - Request extractors and document id parsing
//! - Database pool setup

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod ids;
pub mod state;

pub use config::{Config, StoreProvider};
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
pub use ids::parse_document_id;
pub use state::StateError;
