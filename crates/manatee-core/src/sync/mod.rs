//! Lazy synchronization of entity state.
//!
//! A [`SyncContext`] holds the last JSON fetched for one remote entity. Each
//! typed property is a static [`Field`] that reads from (and writes through)
//! that context. Reading an expired context triggers one fetch; writing
//! validates, stages the value and sends one update call.

pub mod context;
pub mod field;

pub use context::{Identified, Owner, SyncContext, SyncKey, Synchronized};
pub use field::Field;
