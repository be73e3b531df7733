//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the ledger.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// Only deterministic failures live here. Mutations that cannot fail (add,
/// remove) never produce one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// No item is stored under the requested id.
    #[error("item not found: {0}")]
    NotFound(ItemId),

    /// Serialized input could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// Ledger state could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl LedgerError {
    pub fn not_found(id: ItemId) -> Self {
        Self::NotFound(id)
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
