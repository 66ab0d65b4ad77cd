// # dnszone-core
//
// Core library for provider-agnostic DNS zone record management.
//
// ## Architecture Overview
//
// This library defines what every DNS provider adapter implements and what
// every embedding application programs against:
// - **Record**: The generic, caller-facing DNS record
// - **RecordGetter / RecordAppender / RecordSetter / RecordDeleter**: The
//   capability set a provider exposes, one trait per operation
// - **RecordProvider**: Umbrella trait for providers with the full set
// - **OperationError**: Failure of a zone operation, carrying partial results
// - **ProviderRegistry**: Plugin-based registry for provider factories
//
// ## Design Principles
//
// 1. **Library-First**: No process exits, no env vars, no global state
// 2. **Stateless Providers**: Every call is passed its zone explicitly
// 3. **Sequential Batches**: Records are processed in input order, one at a time
// 4. **Partial Success Is Observable**: A failed batch still returns what succeeded
// 5. **Plugin-Based**: Providers are registered dynamically, no hard-coded if-else

pub mod config;
pub mod error;
pub mod record;
pub mod registry;
pub mod traits;

// Re-export core types for convenience
pub use config::ProviderConfig;
pub use error::{Error, Operation, OperationError, OperationResult, Result};
pub use record::Record;
pub use registry::ProviderRegistry;
pub use traits::{
    RecordAppender, RecordDeleter, RecordGetter, RecordProvider, RecordProviderFactory,
    RecordSetter,
};
