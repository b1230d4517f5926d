//! Turns one raw round submission into the relational records that get
//! persisted: merged per-player role records, metric deltas and normalized
//! kill/buy events.
//!
//! Everything in here is pure and single-pass; the backend wraps the result
//! in one database transaction.

pub mod events;
pub mod reconcile;
pub mod round;
