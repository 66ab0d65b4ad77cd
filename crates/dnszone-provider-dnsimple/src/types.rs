//! DNSimple API v2 wire types
//!
//! Only the fields the adapter reads or writes are modelled strictly;
//! everything else the service returns is optional or defaulted so that
//! additive API changes do not break deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric account identifier, as returned by `GET /whoami`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub i64);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Single-object response body: `{"data": {...}}`
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Collection response body: `{"data": [...], "pagination": {...}}`
#[derive(Debug, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub total_entries: u64,
    pub total_pages: u32,
}

/// `GET /whoami` payload
///
/// A user token resolves with no `account`.
#[derive(Debug, Deserialize)]
pub struct Whoami {
    #[serde(default)]
    pub account: Option<Account>,
}

#[derive(Debug, Deserialize)]
pub struct Account {
    pub id: AccountId,
}

/// A record as stored by DNSimple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRecord {
    pub id: i64,
    #[serde(default)]
    pub zone_id: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    #[serde(default)]
    pub priority: Option<u32>,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub system_record: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of record create/update calls
///
/// A `None` TTL is omitted so DNSimple applies the zone default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRecordRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

/// Body of a `PATCH` on an existing record (type is immutable)
#[derive(Debug, Serialize)]
pub(crate) struct ZoneRecordUpdate<'a> {
    pub content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

/// Error body returned with 4xx responses
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
}

impl ApiErrorBody {
    /// Human-readable message, with field errors appended when present
    pub fn describe(&self) -> String {
        let message = self.message.as_deref().unwrap_or("no error message");
        match &self.errors {
            Some(errors) if !errors.is_null() => format!("{} {}", message, errors),
            _ => message.to_string(),
        }
    }
}
