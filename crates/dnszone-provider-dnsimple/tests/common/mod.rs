//! Test doubles and common utilities for adapter contract tests
//!
//! [`StubRegistrar`] is an in-process Registrar Service: it echoes created
//! records back with fresh IDs, upserts on name + type, and counts every
//! call. Clones share state, so a test keeps one handle for assertions and
//! gives another to the provider.

#![allow(dead_code)]

use dnszone_core::{Error, Record, Result};
use dnszone_provider_dnsimple::{AccountId, DnsimpleProvider, RegistrarClient, ZoneRecord, ZoneRecordRequest};
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const ACCOUNT: AccountId = AccountId(1010);

/// Default TTL the stub applies when a request omits one
pub const ZONE_DEFAULT_TTL: u32 = 3600;

#[derive(Default)]
struct StubState {
    whoami_calls: AtomicUsize,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    upsert_calls: AtomicUsize,
    delete_calls: AtomicUsize,

    /// Every create/upsert request, in arrival order
    requests: Mutex<Vec<ZoneRecordRequest>>,
    /// Every delete request, in arrival order
    deleted_ids: Mutex<Vec<i64>>,
    /// Records currently stored
    store: Mutex<Vec<ZoneRecord>>,
    next_id: AtomicI64,

    fail_whoami: Mutex<Option<Error>>,
    hang_whoami: bool,
    fail_list: bool,
    /// 1-based create/upsert call number that fails
    fail_write_at: Option<usize>,
    /// 1-based create/upsert call number that never completes
    hang_write_at: Option<usize>,
}

/// A controllable RegistrarClient that tracks calls
#[derive(Clone)]
pub struct StubRegistrar {
    state: Arc<StubState>,
}

impl StubRegistrar {
    pub fn new() -> Self {
        Self::build(StubState::default())
    }

    fn build(mut state: StubState) -> Self {
        state.next_id = AtomicI64::new(1);
        Self {
            state: Arc::new(state),
        }
    }

    /// Stub whose zone already holds `records`
    pub fn with_records(records: Vec<ZoneRecord>) -> Self {
        let next = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let stub = Self::build(StubState {
            store: Mutex::new(records),
            ..StubState::default()
        });
        stub.state.next_id.store(next, Ordering::SeqCst);
        stub
    }

    /// Stub whose identity lookup fails with `error`
    pub fn failing_whoami(error: Error) -> Self {
        Self::build(StubState {
            fail_whoami: Mutex::new(Some(error)),
            ..StubState::default()
        })
    }

    /// Stub whose identity lookup never completes
    pub fn hanging_whoami() -> Self {
        Self::build(StubState {
            hang_whoami: true,
            ..StubState::default()
        })
    }

    /// Stub whose record listing fails
    pub fn failing_list() -> Self {
        Self::build(StubState {
            fail_list: true,
            ..StubState::default()
        })
    }

    /// Stub whose `call`-th create/upsert fails (1-based)
    pub fn failing_write_at(call: usize) -> Self {
        Self::build(StubState {
            fail_write_at: Some(call),
            ..StubState::default()
        })
    }

    /// Stub whose `call`-th create/upsert never completes (1-based)
    pub fn hanging_write_at(call: usize) -> Self {
        Self::build(StubState {
            hang_write_at: Some(call),
            ..StubState::default()
        })
    }

    /// Provider driving a clone of this stub
    pub fn provider(&self) -> DnsimpleProvider<StubRegistrar> {
        DnsimpleProvider::with_client(self.clone())
    }

    pub fn whoami_calls(&self) -> usize {
        self.state.whoami_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.state.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.state.create_calls.load(Ordering::SeqCst)
    }

    pub fn upsert_calls(&self) -> usize {
        self.state.upsert_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.state.delete_calls.load(Ordering::SeqCst)
    }

    /// Total number of remote calls of any kind
    pub fn total_calls(&self) -> usize {
        self.whoami_calls()
            + self.list_calls()
            + self.create_calls()
            + self.upsert_calls()
            + self.delete_calls()
    }

    pub fn requests(&self) -> Vec<ZoneRecordRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn deleted_ids(&self) -> Vec<i64> {
        self.state.deleted_ids.lock().unwrap().clone()
    }

    pub fn stored(&self) -> Vec<ZoneRecord> {
        self.state.store.lock().unwrap().clone()
    }

    fn write_call(&self, counter: &AtomicUsize, request: &ZoneRecordRequest) -> usize {
        counter.fetch_add(1, Ordering::SeqCst);
        let mut requests = self.state.requests.lock().unwrap();
        requests.push(request.clone());
        requests.len()
    }

    async fn check_write(&self, call: usize) -> Result<()> {
        if self.state.hang_write_at == Some(call) {
            std::future::pending::<()>().await;
        }
        if self.state.fail_write_at == Some(call) {
            return Err(Error::upstream(
                "dnsimple",
                Some(400),
                "Validation failed",
            ));
        }
        Ok(())
    }

    fn insert(&self, zone: &str, request: &ZoneRecordRequest) -> ZoneRecord {
        let record = zone_record(
            self.state.next_id.fetch_add(1, Ordering::SeqCst),
            zone,
            &request.record_type,
            &request.name,
            &request.content,
            request.ttl.unwrap_or(ZONE_DEFAULT_TTL),
        );
        self.state.store.lock().unwrap().push(record.clone());
        record
    }
}

#[async_trait::async_trait]
impl RegistrarClient for StubRegistrar {
    async fn whoami(&self) -> Result<AccountId> {
        self.state.whoami_calls.fetch_add(1, Ordering::SeqCst);
        if self.state.hang_whoami {
            std::future::pending::<()>().await;
        }
        if let Some(error) = self.state.fail_whoami.lock().unwrap().take() {
            return Err(error);
        }
        Ok(ACCOUNT)
    }

    async fn list_zone_records(&self, account: AccountId, _zone: &str) -> Result<Vec<ZoneRecord>> {
        assert_eq!(account, ACCOUNT);
        self.state.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.state.fail_list {
            return Err(Error::upstream("dnsimple", Some(404), "Zone not found"));
        }
        Ok(self.stored())
    }

    async fn create_zone_record(
        &self,
        account: AccountId,
        zone: &str,
        request: &ZoneRecordRequest,
    ) -> Result<ZoneRecord> {
        assert_eq!(account, ACCOUNT);
        let call = self.write_call(&self.state.create_calls, request);
        self.check_write(call).await?;
        Ok(self.insert(zone, request))
    }

    async fn create_or_update_zone_record(
        &self,
        account: AccountId,
        zone: &str,
        request: &ZoneRecordRequest,
    ) -> Result<ZoneRecord> {
        assert_eq!(account, ACCOUNT);
        let call = self.write_call(&self.state.upsert_calls, request);
        self.check_write(call).await?;

        {
            let mut store = self.state.store.lock().unwrap();
            if let Some(existing) = store
                .iter_mut()
                .find(|r| r.name == request.name && r.record_type == request.record_type)
            {
                existing.content = request.content.clone();
                existing.ttl = request.ttl.unwrap_or(ZONE_DEFAULT_TTL);
                return Ok(existing.clone());
            }
        }

        Ok(self.insert(zone, request))
    }

    async fn delete_zone_record(
        &self,
        account: AccountId,
        _zone: &str,
        record_id: i64,
    ) -> Result<()> {
        assert_eq!(account, ACCOUNT);
        self.state.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.state.deleted_ids.lock().unwrap().push(record_id);

        let mut store = self.state.store.lock().unwrap();
        match store.iter().position(|r| r.id == record_id) {
            Some(position) => {
                store.remove(position);
                Ok(())
            }
            None => Err(Error::upstream(
                "dnsimple",
                Some(404),
                format!("Record `{}` not found", record_id),
            )),
        }
    }
}

/// Build a stored DNSimple record
pub fn zone_record(
    id: i64,
    zone: &str,
    record_type: &str,
    name: &str,
    content: &str,
    ttl: u32,
) -> ZoneRecord {
    ZoneRecord {
        id,
        zone_id: zone.to_string(),
        parent_id: None,
        name: name.to_string(),
        content: content.to_string(),
        ttl,
        priority: None,
        record_type: record_type.to_string(),
        regions: vec!["global".to_string()],
        system_record: false,
        created_at: None,
        updated_at: None,
    }
}

/// Build a generic record with a TTL in seconds
pub fn record(record_type: &str, name: &str, value: &str, ttl_secs: u64) -> Record {
    Record::new(record_type, name, value).with_ttl(Duration::from_secs(ttl_secs))
}

/// Compare records ignoring the provider-assigned ID
pub fn content_of(records: &[Record]) -> Vec<(String, String, String, Duration)> {
    records
        .iter()
        .map(|r| (r.record_type.clone(), r.name.clone(), r.value.clone(), r.ttl))
        .collect()
}
