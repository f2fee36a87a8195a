//! Document identifier parsing
//!
//! Ids arrive as raw path segments and are parsed before any store access so
//! that malformed values are rejected with a 400.

use uuid::Uuid;

use crate::error::{Error, Result};

/// Parse a store-native document id, naming the entity in the error message
pub fn parse_document_id(raw: &str, entity: &str) -> Result<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| Error::Validation(format!("Invalid {} ID", entity)))
}
