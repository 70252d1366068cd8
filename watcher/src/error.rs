//! Unified error types for promowatch
//!
//! This module defines error types for each layer:
//! - `StoreError`: storefront API client errors
//! - `SinkError`: report publishing errors
//!
//! Per-element validation failures are not errors in this sense; they are
//! collected as `Rejection` records in the domain layer and never abort a
//! cycle.

use thiserror::Error;

/// Storefront API client errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Report publishing errors
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
