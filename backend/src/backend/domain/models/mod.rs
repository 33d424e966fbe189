//! Domain models for the debt manager.
//!
//! These carry `chrono` timestamps internally; the wire shape (camelCase,
//! epoch milliseconds) lives in the `shared` crate and conversions happen at
//! the model boundary.

pub mod comment;
pub mod family;
pub mod location;
pub mod notification;
pub mod settings;

use chrono::{DateTime, Utc};

/// Epoch-millisecond wire timestamp to a domain timestamp.
/// Out-of-range values collapse to the epoch rather than failing an import.
pub(crate) fn datetime_from_millis(millis: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}
