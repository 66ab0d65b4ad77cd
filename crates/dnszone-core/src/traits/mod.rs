//! Core traits for zone record management
//!
//! One trait per capability, so a provider can implement exactly the
//! operations its backend supports:
//!
//! - [`RecordGetter`]: List the records of a zone
//! - [`RecordAppender`]: Create new records
//! - [`RecordSetter`]: Create or update records
//! - [`RecordDeleter`]: Delete records by provider ID
//!
//! [`RecordProvider`] bundles all four for registry-created providers.

pub mod record_provider;

pub use record_provider::{
    RecordAppender, RecordDeleter, RecordGetter, RecordProvider, RecordProviderFactory,
    RecordSetter,
};
