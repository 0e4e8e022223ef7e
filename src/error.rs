//! Error types for shop transactions and config loading

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a transaction can be rejected. None of these end the session;
/// a rejected commit leaves both ledgers and the pending quantity untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    /// Item name is not present in the ledger the operation targets
    #[error("Item '{item_id}' not found")]
    NotFound { item_id: String },

    /// Commit quantity is larger than the source ledger holds
    #[error("Insufficient stock for '{item_id}': requested {requested}, available {available}")]
    InsufficientStock {
        item_id: String,
        requested: u32,
        available: u32,
    },

    #[error("Invalid quantity {quantity}")]
    InvalidQuantity { quantity: u32 },

    /// Destination count would overflow if the transfer were applied
    #[error("Cannot hold {requested} more of '{item_id}': already holding {held}")]
    CapacityExceeded {
        item_id: String,
        requested: u32,
        held: u32,
    },

    /// Commit pressed with no item selected
    #[error("No transaction pending")]
    NothingPending,
}

/// Errors that can occur when loading a shop config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unknown item '{name}' referenced in [{section}]")]
    UnknownItem { name: String, section: &'static str },

    #[error("Duplicate item '{name}' in catalog")]
    DuplicateItem { name: String },
}
