// # Record Provider Traits
//
// Defines the interface for managing DNS records via provider APIs.
//
// ## Implementations
//
// - DNSimple: `dnszone-provider-dnsimple` crate

use async_trait::async_trait;

use crate::error::OperationResult;
use crate::record::Record;

/// Lists the records of a zone
///
/// # Contract
///
/// - An empty `zone` is rejected with `Error::InvalidArgument` before any
///   remote call
/// - Records are returned in the provider's order, translated 1:1
/// - Read-only
#[async_trait]
pub trait RecordGetter: Send + Sync {
    async fn get_records(&self, zone: &str) -> OperationResult;
}

/// Creates new records in a zone
///
/// # Contract
///
/// - Records are created one at a time, in input order
/// - Not transactional: when a record fails, the error carries the records
///   created before it (`OperationError::completed`) and the rest are skipped
/// - Not idempotent: appending the same input twice creates duplicates
/// - Returned records reflect the provider's response (ID, normalized fields)
#[async_trait]
pub trait RecordAppender: Send + Sync {
    async fn append_records(&self, zone: &str, records: &[Record]) -> OperationResult;
}

/// Creates or updates records in a zone
///
/// Same sequential, partial-success semantics as [`RecordAppender`], but each
/// record is upserted. Which existing record counts as "the same" is decided
/// by the provider, not by this trait.
#[async_trait]
pub trait RecordSetter: Send + Sync {
    async fn set_records(&self, zone: &str, records: &[Record]) -> OperationResult;
}

/// Deletes records from a zone
///
/// # Contract
///
/// - Each record must carry the provider-assigned `id`
/// - Deletion stops at the first failure (including an unusable ID)
/// - On success the *input* records are returned, not re-fetched copies
#[async_trait]
pub trait RecordDeleter: Send + Sync {
    async fn delete_records(&self, zone: &str, records: &[Record]) -> OperationResult;
}

/// A provider with the full capability set
///
/// # Thread Safety
///
/// Providers hold only immutable configuration and may be shared across
/// tasks. Concurrent calls are safe with respect to the provider itself;
/// races on the same remote record are the remote service's concern.
pub trait RecordProvider: RecordGetter + RecordAppender + RecordSetter + RecordDeleter {
    /// Get the provider name (for logging/debugging)
    ///
    /// # Returns
    ///
    /// A static string identifying the provider (e.g., "dnsimple")
    fn provider_name(&self) -> &'static str;
}

/// Helper trait for constructing record providers from configuration
pub trait RecordProviderFactory: Send + Sync {
    /// Create a RecordProvider instance from configuration
    ///
    /// # Parameters
    ///
    /// - `config`: Configuration specific to this provider
    ///
    /// # Returns
    ///
    /// A boxed RecordProvider trait object
    fn create(
        &self,
        config: &crate::config::ProviderConfig,
    ) -> Result<Box<dyn RecordProvider>, crate::Error>;
}
