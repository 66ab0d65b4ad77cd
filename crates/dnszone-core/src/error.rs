//! Error types for zone record operations
//!
//! Two layers are defined here:
//!
//! - [`Error`] classifies *what* went wrong (bad input, failed identity
//!   resolution, a failing Registrar Service call).
//! - [`OperationError`] says *where* it went wrong: which operation, which
//!   zone, which input record, and which records had already been applied.

use std::fmt;

use thiserror::Error;

use crate::record::Record;

/// Result type alias for single-step operations (client calls, factories)
pub type Result<T> = std::result::Result<T, Error>;

/// Result of a zone operation: the affected records, or an [`OperationError`]
/// that still carries the records applied before the failure.
pub type OperationResult = std::result::Result<Vec<Record>, OperationError>;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Input rejected locally, before contacting the Registrar Service
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Account identity could not be resolved with the configured credential
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// A Registrar Service call failed for a reason other than authentication
    #[error("Upstream error ({provider}{}): {message}", status_suffix(.status))]
    Upstream {
        /// Provider name
        provider: String,
        /// HTTP status, when the failure came with one
        status: Option<u16>,
        /// Error message
        message: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(", status {s}")).unwrap_or_default()
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an authentication error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Create an upstream error
    pub fn upstream(
        provider: impl Into<String>,
        status: Option<u16>,
        message: impl Into<String>,
    ) -> Self {
        Self::Upstream {
            provider: provider.into(),
            status,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }

    /// The Registrar Service reported that the target does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Upstream { status: Some(404), .. })
    }

    /// The Registrar Service throttled the request
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Upstream { status: Some(429), .. })
    }
}

/// The four zone operations, named for error context and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetRecords,
    AppendRecords,
    SetRecords,
    DeleteRecords,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::GetRecords => "get_records",
            Operation::AppendRecords => "append_records",
            Operation::SetRecords => "set_records",
            Operation::DeleteRecords => "delete_records",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a zone operation
///
/// Batch operations are sequential and not transactional. When the record
/// at `index` fails, the records before it have already been applied by the
/// Registrar Service and are returned in `completed`. A non-empty
/// `completed` therefore means *partial success*, not total failure.
///
/// `index` is `None` when the operation failed before any record was
/// attempted (invalid zone, identity resolution, or a listing failure).
#[derive(Error, Debug)]
#[error("{operation} failed for zone '{zone}'{}: {source}", index_suffix(.index))]
pub struct OperationError {
    /// Operation that failed
    pub operation: Operation,
    /// Zone the operation was addressed to
    pub zone: String,
    /// Position of the failing record in the input slice
    pub index: Option<usize>,
    /// Records applied before the failure, in input order
    pub completed: Vec<Record>,
    /// Underlying error
    #[source]
    pub source: Error,
}

fn index_suffix(index: &Option<usize>) -> String {
    index.map(|i| format!(" at record #{i}")).unwrap_or_default()
}

impl OperationError {
    /// Failure before any record was attempted
    pub fn new(operation: Operation, zone: impl Into<String>, source: Error) -> Self {
        Self {
            operation,
            zone: zone.into(),
            index: None,
            completed: Vec::new(),
            source,
        }
    }

    /// Failure of the record at `index`, after `completed` were applied
    pub fn at_record(
        operation: Operation,
        zone: impl Into<String>,
        index: usize,
        completed: Vec<Record>,
        source: Error,
    ) -> Self {
        Self {
            operation,
            zone: zone.into(),
            index: Some(index),
            completed,
            source,
        }
    }

    /// Underlying error classification
    pub fn kind(&self) -> &Error {
        &self.source
    }

    /// Whether some records were applied before the failure
    pub fn is_partial(&self) -> bool {
        !self.completed.is_empty()
    }
}
