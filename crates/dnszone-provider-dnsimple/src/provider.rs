//! The zone record adapter
//!
//! Each operation has the same shape: reject an empty zone, resolve the
//! account identity, translate each record and issue one client call per
//! record, translate the responses back. Records are processed strictly in
//! input order; the first failure ends the operation and the records
//! applied so far travel back inside the [`OperationError`].

use async_trait::async_trait;
use dnszone_core::{
    Error, Operation, OperationError, OperationResult, Record, RecordAppender, RecordDeleter,
    RecordGetter, RecordProvider, RecordSetter, Result,
};
use std::time::Duration;

use crate::client::{DnsimpleClient, PROVIDER_NAME, RegistrarClient};
use crate::types::{AccountId, ZoneRecord, ZoneRecordRequest};

/// DNSimple record provider
///
/// Holds only the configured client (and through it, the API token). No
/// provisioning step is needed: a freshly constructed provider behaves like
/// a long-lived one, and the account identity is resolved again on every
/// call so a rotated or revoked token surfaces immediately.
///
/// # Type Parameter
///
/// `C` is the [`RegistrarClient`] the provider drives, [`DnsimpleClient`] in
/// production.
#[derive(Debug)]
pub struct DnsimpleProvider<C = DnsimpleClient> {
    client: C,
}

impl DnsimpleProvider<DnsimpleClient> {
    /// Create a provider for the production DNSimple API
    pub fn new(api_token: impl Into<String>) -> Self {
        Self::with_client(DnsimpleClient::new(api_token))
    }
}

impl<C: RegistrarClient> DnsimpleProvider<C> {
    /// Create a provider driving an existing client
    pub fn with_client(client: C) -> Self {
        Self { client }
    }

    /// The client this provider drives
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Shared preamble: validate the zone, then resolve the account
    ///
    /// Any identity failure is reported as `Error::Authentication`.
    async fn resolve_account(
        &self,
        operation: Operation,
        zone: &str,
    ) -> std::result::Result<AccountId, OperationError> {
        if zone.is_empty() {
            return Err(OperationError::new(
                operation,
                zone,
                Error::invalid_argument("zone cannot be empty"),
            ));
        }

        self.client.whoami().await.map_err(|e| {
            tracing::warn!("{}: account identity resolution failed: {}", operation, e);
            let source = match e {
                Error::Authentication(_) => e,
                other => Error::auth(format!("could not resolve account identity: {}", other)),
            };
            OperationError::new(operation, zone, source)
        })
    }

    async fn write_records(
        &self,
        mode: WriteMode,
        zone: &str,
        records: &[Record],
    ) -> OperationResult {
        let operation = mode.operation();
        let account = self.resolve_account(operation, zone).await?;

        let mut written = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let request = to_request(record);
            let response = match mode {
                WriteMode::Create => {
                    self.client
                        .create_zone_record(account, zone, &request)
                        .await
                }
                WriteMode::Upsert => {
                    self.client
                        .create_or_update_zone_record(account, zone, &request)
                        .await
                }
            };

            match response {
                Ok(stored) => written.push(to_record(&stored)),
                Err(e) => {
                    tracing::warn!(
                        "{} on zone {} stopped at record #{} ({} {}) after {} succeeded: {}",
                        operation,
                        zone,
                        index,
                        record.name,
                        record.record_type,
                        written.len(),
                        e
                    );
                    return Err(OperationError::at_record(operation, zone, index, written, e));
                }
            }
        }

        tracing::info!("{} on zone {}: {} record(s)", operation, zone, written.len());
        Ok(written)
    }
}

#[derive(Debug, Clone, Copy)]
enum WriteMode {
    Create,
    Upsert,
}

impl WriteMode {
    fn operation(self) -> Operation {
        match self {
            WriteMode::Create => Operation::AppendRecords,
            WriteMode::Upsert => Operation::SetRecords,
        }
    }
}

/// Translate a DNSimple record to the generic form
pub fn to_record(stored: &ZoneRecord) -> Record {
    Record {
        id: Some(stored.id.to_string()),
        record_type: stored.record_type.clone(),
        name: stored.name.clone(),
        value: stored.content.clone(),
        ttl: Duration::from_secs(u64::from(stored.ttl)),
    }
}

/// Translate a generic record to a DNSimple create/update request
///
/// The TTL is sent in whole seconds. A zero TTL is left out so the zone
/// default applies; values beyond `u32::MAX` seconds saturate.
pub fn to_request(record: &Record) -> ZoneRecordRequest {
    let ttl = match record.ttl_secs() {
        0 => None,
        secs => Some(u32::try_from(secs).unwrap_or(u32::MAX)),
    };

    ZoneRecordRequest {
        name: record.name.clone(),
        record_type: record.record_type.clone(),
        content: record.value.clone(),
        ttl,
    }
}

/// Parse the DNSimple numeric ID out of a generic record
pub fn parse_record_id(record: &Record) -> Result<i64> {
    let id = record.id().ok_or_else(|| {
        Error::invalid_argument(format!(
            "record {} {} has no ID",
            record.name, record.record_type
        ))
    })?;

    id.parse::<i64>().map_err(|e| {
        Error::invalid_argument(format!("record ID {:?} is not a DNSimple record ID: {}", id, e))
    })
}

#[async_trait]
impl<C: RegistrarClient> RecordGetter for DnsimpleProvider<C> {
    async fn get_records(&self, zone: &str) -> OperationResult {
        let operation = Operation::GetRecords;
        let account = self.resolve_account(operation, zone).await?;

        let stored = self
            .client
            .list_zone_records(account, zone)
            .await
            .map_err(|e| OperationError::new(operation, zone, e))?;

        let records: Vec<Record> = stored.iter().map(to_record).collect();
        tracing::info!("{} on zone {}: {} record(s)", operation, zone, records.len());
        Ok(records)
    }
}

#[async_trait]
impl<C: RegistrarClient> RecordAppender for DnsimpleProvider<C> {
    async fn append_records(&self, zone: &str, records: &[Record]) -> OperationResult {
        self.write_records(WriteMode::Create, zone, records).await
    }
}

#[async_trait]
impl<C: RegistrarClient> RecordSetter for DnsimpleProvider<C> {
    async fn set_records(&self, zone: &str, records: &[Record]) -> OperationResult {
        self.write_records(WriteMode::Upsert, zone, records).await
    }
}

#[async_trait]
impl<C: RegistrarClient> RecordDeleter for DnsimpleProvider<C> {
    async fn delete_records(&self, zone: &str, records: &[Record]) -> OperationResult {
        let operation = Operation::DeleteRecords;
        let account = self.resolve_account(operation, zone).await?;

        let mut deleted = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let outcome = match parse_record_id(record) {
                Ok(record_id) => {
                    self.client
                        .delete_zone_record(account, zone, record_id)
                        .await
                }
                Err(e) => Err(e),
            };

            if let Err(e) = outcome {
                tracing::warn!(
                    "{} on zone {} stopped at record #{} after {} succeeded: {}",
                    operation,
                    zone,
                    index,
                    deleted.len(),
                    e
                );
                return Err(OperationError::at_record(operation, zone, index, deleted, e));
            }

            deleted.push(record.clone());
        }

        tracing::info!("{} on zone {}: {} record(s)", operation, zone, deleted.len());
        Ok(deleted)
    }
}

impl<C: RegistrarClient> RecordProvider for DnsimpleProvider<C> {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}

fn assert_capabilities<T>()
where
    T: RecordGetter + RecordAppender + RecordSetter + RecordDeleter + RecordProvider,
{
}

// Fails to compile if the provider loses a capability
const _: fn() = assert_capabilities::<DnsimpleProvider>;

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(id: i64, record_type: &str, name: &str, content: &str, ttl: u32) -> ZoneRecord {
        ZoneRecord {
            id,
            zone_id: "example.com".into(),
            parent_id: None,
            name: name.into(),
            content: content.into(),
            ttl,
            priority: None,
            record_type: record_type.into(),
            regions: vec!["global".into()],
            system_record: false,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_to_record() {
        let record = to_record(&stored(5, "CNAME", "www", "example.com", 3600));
        assert_eq!(record.id.as_deref(), Some("5"));
        assert_eq!(record.record_type, "CNAME");
        assert_eq!(record.name, "www");
        assert_eq!(record.value, "example.com");
        assert_eq!(record.ttl, Duration::from_secs(3600));
    }

    #[test]
    fn test_to_request_ttl_conversion() {
        let record = Record::new("TXT", "foo", "bar").with_ttl(Duration::from_millis(300_750));
        let request = to_request(&record);
        assert_eq!(request.ttl, Some(300));
        assert_eq!(request.content, "bar");

        let record = Record::new("TXT", "foo", "bar");
        assert_eq!(to_request(&record).ttl, None);

        let record = Record::new("TXT", "foo", "bar").with_ttl(Duration::from_secs(u64::MAX));
        assert_eq!(to_request(&record).ttl, Some(u32::MAX));
    }

    #[test]
    fn test_parse_record_id() {
        assert_eq!(parse_record_id(&Record::default().with_id("64784")).unwrap(), 64784);

        let err = parse_record_id(&Record::default().with_id("abc")).unwrap_err();
        assert!(err.is_invalid_argument());

        let err = parse_record_id(&Record::new("A", "www", "1.2.3.4")).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_provider_name() {
        let provider = DnsimpleProvider::new("token");
        assert_eq!(provider.provider_name(), "dnsimple");
    }

    #[test]
    fn test_api_token_not_exposed_in_debug() {
        let provider = DnsimpleProvider::new("secret_token_12345");
        let debug_str = format!("{:?}", provider);
        assert!(!debug_str.contains("secret_token"));
        assert!(debug_str.contains("DnsimpleProvider"));
    }
}
