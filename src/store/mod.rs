//! # Item Store
//!
//! Persistence for items in a single SQLite table.
//!
//! The store owns exactly one connection for the lifetime of the process.
//! SQLite serializes statements on that connection, so handlers never need
//! their own locking. Every statement is parameterized.

mod errors;
mod items;

pub use errors::{StoreError, StoreResult};
pub use items::ItemStore;
