//! Registrar client: the narrow contract the adapter needs from DNSimple
//!
//! [`RegistrarClient`] is the seam between the adapter and the remote
//! service. [`DnsimpleClient`] implements it over HTTPS with reqwest; tests
//! substitute in-process stubs.
//!
//! ## API Reference
//!
//! - DNSimple API v2: https://developer.dnsimple.com/v2/
//! - Whoami: GET `/whoami`
//! - List records: GET `/:account/zones/:zone/records`
//! - Create record: POST `/:account/zones/:zone/records`
//! - Update record: PATCH `/:account/zones/:zone/records/:record`
//! - Delete record: DELETE `/:account/zones/:zone/records/:record`

use async_trait::async_trait;
use dnszone_core::{Error, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::types::{
    AccountId, ApiErrorBody, Envelope, ListEnvelope, Whoami, ZoneRecord, ZoneRecordRequest,
    ZoneRecordUpdate,
};

/// DNSimple production API base URL
pub const DNSIMPLE_API_BASE: &str = "https://api.dnsimple.com/v2";

/// DNSimple sandbox API base URL
pub const DNSIMPLE_SANDBOX_API_BASE: &str = "https://api.sandbox.dnsimple.com/v2";

/// Default HTTP timeout for API requests (30 seconds)
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) const PROVIDER_NAME: &str = "dnsimple";

/// Operations the adapter consumes from the Registrar Service
///
/// Every call is a single remote operation. Implementations must not retry,
/// cache or batch; that is left to callers.
#[async_trait]
pub trait RegistrarClient: Send + Sync {
    /// Resolve the account the configured credential belongs to
    async fn whoami(&self) -> Result<AccountId>;

    /// List the records of `zone` (first page only)
    async fn list_zone_records(&self, account: AccountId, zone: &str) -> Result<Vec<ZoneRecord>>;

    /// Create a new record; never deduplicates
    async fn create_zone_record(
        &self,
        account: AccountId,
        zone: &str,
        request: &ZoneRecordRequest,
    ) -> Result<ZoneRecord>;

    /// Update the matching record in place, or create it when none matches
    ///
    /// The match rule belongs to the implementation. [`DnsimpleClient`]
    /// matches on name and type.
    async fn create_or_update_zone_record(
        &self,
        account: AccountId,
        zone: &str,
        request: &ZoneRecordRequest,
    ) -> Result<ZoneRecord>;

    /// Delete a record by its numeric ID
    async fn delete_zone_record(&self, account: AccountId, zone: &str, record_id: i64)
    -> Result<()>;
}

/// HTTPS client for the DNSimple API v2
///
/// # Security
///
/// The Debug implementation intentionally does NOT expose the API token.
pub struct DnsimpleClient {
    /// DNSimple API token
    /// ⚠️ NEVER log this value
    api_token: String,

    /// API base URL, without trailing slash
    base_url: String,

    /// HTTP client for API requests
    client: reqwest::Client,
}

impl std::fmt::Debug for DnsimpleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DnsimpleClient")
            .field("api_token", &"<REDACTED>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl DnsimpleClient {
    /// Client for the production API
    pub fn new(api_token: impl Into<String>) -> Self {
        Self::with_base_url(api_token, DNSIMPLE_API_BASE, DEFAULT_HTTP_TIMEOUT)
    }

    /// Client for the sandbox API
    pub fn sandbox(api_token: impl Into<String>) -> Self {
        Self::with_base_url(api_token, DNSIMPLE_SANDBOX_API_BASE, DEFAULT_HTTP_TIMEOUT)
    }

    /// Client for an explicit base URL (e.g. a mock server)
    pub fn with_base_url(
        api_token: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            api_token: api_token.into(),
            base_url,
            client: reqwest::Client::builder()
                .timeout(timeout)
                .user_agent(concat!("dnszone/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
        }
    }

    /// API base URL in use
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn records_url(&self, account: AccountId, zone: &str) -> Result<reqwest::Url> {
        self.zone_url(account, zone, &["records"])
    }

    fn record_url(&self, account: AccountId, zone: &str, record_id: i64) -> Result<reqwest::Url> {
        self.zone_url(account, zone, &["records", record_id.to_string().as_str()])
    }

    /// `{base}/{account}/zones/{zone}/...` with each part percent-encoded as
    /// one path segment
    fn zone_url(&self, account: AccountId, zone: &str, rest: &[&str]) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.base_url).map_err(|e| {
            Error::config(format!("invalid DNSimple base URL {:?}: {}", self.base_url, e))
        })?;

        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                Error::config(format!("DNSimple base URL {:?} cannot hold a path", self.base_url))
            })?;
            segments
                .pop_if_empty()
                .push(&account.to_string())
                .push("zones")
                .push(zone)
                .extend(rest);
        }

        Ok(url)
    }

    /// Send an authenticated request, mapping non-2xx statuses to errors
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        action: &str,
    ) -> Result<reqwest::Response> {
        let response = request
            .bearer_auth(&self.api_token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                Error::upstream(PROVIDER_NAME, None, format!("{}: HTTP request failed: {}", action, e))
            })?;

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(error_from_response(response, action).await)
        }
    }

    /// Send a request and decode its JSON body
    async fn fetch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        action: &str,
    ) -> Result<T> {
        self.execute(request, action)
            .await?
            .json()
            .await
            .map_err(|e| {
                Error::upstream(
                    PROVIDER_NAME,
                    None,
                    format!("{}: failed to parse response: {}", action, e),
                )
            })
    }
}

/// Map a failed HTTP response to an [`Error`]
async fn error_from_response(response: reqwest::Response, action: &str) -> Error {
    let status = response.status();
    let body: ApiErrorBody = response.json().await.unwrap_or_default();
    let detail = body.describe();

    match status.as_u16() {
        401 | 403 => Error::auth(format!(
            "{}: invalid API token or insufficient permissions ({}): {}",
            action, status, detail
        )),
        429 => Error::upstream(
            PROVIDER_NAME,
            Some(429),
            format!("{}: rate limit exceeded: {}", action, detail),
        ),
        code @ 500..=599 => Error::upstream(
            PROVIDER_NAME,
            Some(code),
            format!("{}: DNSimple server error (transient): {}", action, detail),
        ),
        code => Error::upstream(PROVIDER_NAME, Some(code), format!("{}: {}", action, detail)),
    }
}

#[async_trait]
impl RegistrarClient for DnsimpleClient {
    async fn whoami(&self) -> Result<AccountId> {
        tracing::debug!("Resolving DNSimple account identity");

        let url = format!("{}/whoami", self.base_url);
        let whoami: Envelope<Whoami> = self.fetch(self.client.get(url), "whoami").await?;

        match whoami.data.account {
            Some(account) => {
                tracing::debug!("Resolved DNSimple account: {}", account.id);
                Ok(account.id)
            }
            None => Err(Error::auth(
                "whoami: token is not scoped to an account (user tokens are not supported)",
            )),
        }
    }

    async fn list_zone_records(&self, account: AccountId, zone: &str) -> Result<Vec<ZoneRecord>> {
        tracing::debug!("Listing records for zone: {}", zone);

        let url = self.records_url(account, zone)?;
        let page: ListEnvelope<ZoneRecord> =
            self.fetch(self.client.get(url), "list zone records").await?;

        if let Some(pagination) = page.pagination {
            if pagination.total_pages > 1 {
                tracing::warn!(
                    "Zone {} has {} records across {} pages; only page {} ({} records) was read",
                    zone,
                    pagination.total_entries,
                    pagination.total_pages,
                    pagination.current_page,
                    page.data.len()
                );
            }
        }

        Ok(page.data)
    }

    async fn create_zone_record(
        &self,
        account: AccountId,
        zone: &str,
        request: &ZoneRecordRequest,
    ) -> Result<ZoneRecord> {
        tracing::debug!(
            "Creating record in zone {}: {} {}",
            zone,
            request.name,
            request.record_type
        );

        let url = self.records_url(account, zone)?;
        let created: Envelope<ZoneRecord> = self
            .fetch(self.client.post(url).json(request), "create zone record")
            .await?;

        Ok(created.data)
    }

    async fn create_or_update_zone_record(
        &self,
        account: AccountId,
        zone: &str,
        request: &ZoneRecordRequest,
    ) -> Result<ZoneRecord> {
        let url = self.records_url(account, zone)?;
        let query = [
            ("name", request.name.as_str()),
            ("type", request.record_type.as_str()),
        ];
        let matches: ListEnvelope<ZoneRecord> = self
            .fetch(self.client.get(url).query(&query), "find zone record")
            .await?;

        let existing = matches
            .data
            .into_iter()
            .find(|r| r.name == request.name && r.record_type == request.record_type);

        let Some(existing) = existing else {
            return self.create_zone_record(account, zone, request).await;
        };

        tracing::debug!(
            "Updating record {} in zone {}: {} {}",
            existing.id,
            zone,
            request.name,
            request.record_type
        );

        let update = ZoneRecordUpdate {
            content: &request.content,
            ttl: request.ttl,
        };
        let updated: Envelope<ZoneRecord> = self
            .fetch(
                self.client
                    .patch(self.record_url(account, zone, existing.id)?)
                    .json(&update),
                "update zone record",
            )
            .await?;

        Ok(updated.data)
    }

    async fn delete_zone_record(
        &self,
        account: AccountId,
        zone: &str,
        record_id: i64,
    ) -> Result<()> {
        tracing::debug!("Deleting record {} from zone {}", record_id, zone);

        let url = self.record_url(account, zone, record_id)?;
        self.execute(self.client.delete(url), "delete zone record")
            .await?;

        Ok(())
    }
}
