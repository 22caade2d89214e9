//! Reply definitions
//!
//! Represents the server's one-line response.

use std::fmt;

use crate::record::Rejection;

/// Acknowledgment line sent for an accepted record
pub const OK_LINE: &str = "Ok";

/// Diagnostic line sent when a valid record could not be persisted
pub const STORE_FAILURE_LINE: &str = "Error: could not persist record";

/// A response to send to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Record validated and durably appended
    Ok,

    /// Record rejected by validation; nothing persisted
    Rejected(Rejection),

    /// Record was valid but the store append failed
    StoreFailure,
}

impl Reply {
    pub fn is_ok(&self) -> bool {
        matches!(self, Reply::Ok)
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Ok => f.write_str(OK_LINE),
            Reply::Rejected(rejection) => write!(f, "Error: {}", rejection),
            Reply::StoreFailure => f.write_str(STORE_FAILURE_LINE),
        }
    }
}
