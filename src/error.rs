//! Error types for nimbus-ingest
//!
//! Provides a unified error type for all operations. Field-level validation
//! failures live in a separate type ([`crate::record::Rejection`]) because
//! they are part of the wire protocol, not operational faults.

use thiserror::Error;

/// Result type alias using IngestError
pub type Result<T> = std::result::Result<T, IngestError>;

/// Unified error type for nimbus-ingest operations
#[derive(Debug, Error)]
pub enum IngestError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("store error: {0}")]
    Store(String),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("network error: {0}")]
    Network(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("configuration error: {0}")]
    Config(String),
}
