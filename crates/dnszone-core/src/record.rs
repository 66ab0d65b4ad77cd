//! Generic DNS record
//!
//! [`Record`] is the caller-facing representation shared by every provider.
//! Providers translate it to and from their own wire types; the fields are
//! carried verbatim, with no validation or normalization.

use std::time::Duration;

/// A single DNS resource record
///
/// # Fields
///
/// - `id`: Opaque identifier assigned by the provider; `None` for records
///   that have not been created yet
/// - `record_type`: Resource record type token (e.g. "A", "CNAME", "TXT")
/// - `name`: Owner name relative to the zone ("" or "@" style apex names
///   are provider-specific and passed through untouched)
/// - `value`: Record content, provider-specific encoding preserved
/// - `ttl`: Time-to-live
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Record {
    pub id: Option<String>,
    pub record_type: String,
    pub name: String,
    pub value: String,
    pub ttl: Duration,
}

impl Record {
    /// Create a record with no ID and a zero TTL
    pub fn new(
        record_type: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            record_type: record_type.into(),
            name: name.into(),
            value: value.into(),
            ttl: Duration::ZERO,
        }
    }

    /// Set the TTL
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the provider-assigned ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// TTL in whole seconds, sub-second precision truncated
    pub fn ttl_secs(&self) -> u64 {
        self.ttl.as_secs()
    }

    /// The provider-assigned ID, treating an empty string as absent
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}
