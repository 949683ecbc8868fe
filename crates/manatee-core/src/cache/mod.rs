//! In-memory caching of remote state.
//!
//! - `CachedData`: a value plus the instant it was fetched, with staleness checks.
//! - `EntityCache`: identity map so every handle to the same remote entity
//!   shares one synchronization context.
//!
//! Nothing is written to disk; the cache lives as long as its client.

pub mod entry;
pub mod manager;

pub use entry::CachedData;
pub use manager::EntityCache;
