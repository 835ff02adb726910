//! Key-value ledger boundary.
//!
//! Customer records are stored as opaque byte values under their customer key.
//! The real ledger (with its own commit and consistency semantics) lives
//! outside this workspace; this module defines the contract the service relies
//! on and an in-memory implementation of it.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryLedger;
pub use r#trait::{Ledger, LedgerEntry, LedgerError};
