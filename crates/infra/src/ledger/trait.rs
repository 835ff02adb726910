use chrono::{DateTime, Utc};
use thiserror::Error;

use kyc_core::ExpectedVersion;
use std::sync::Arc;

/// A value stored under a key, with the version the ledger assigned to it.
///
/// Versions start at `1` for the first write of a key and increase by one per
/// write. Version `0` is reserved for "nothing stored".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub key: String,
    pub version: u64,
    pub value: Vec<u8>,
    pub updated_at: DateTime<Utc>,
}

/// Ledger operation error.
///
/// These are **infrastructure errors** as opposed to domain errors (decode
/// failures, unknown sections, ...).
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The stored version did not match the caller's expectation.
    #[error("optimistic concurrency check failed: {0}")]
    Concurrency(String),

    /// The backend could not serve the request.
    #[error("ledger backend failure: {0}")]
    Backend(String),
}

/// Single-key read/write store for opaque values.
///
/// Each call is atomic on its own; a `get` followed by a `put` is not. Callers
/// that read-modify-write use [`Ledger::put_if_version`] with the version they
/// read, so a concurrent writer surfaces as [`LedgerError::Concurrency`] instead
/// of a silently lost update.
pub trait Ledger: Send + Sync {
    /// Fetch the current value under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<LedgerEntry>, LedgerError>;

    /// Whether a value is stored under `key`.
    fn exists(&self, key: &str) -> Result<bool, LedgerError> {
        Ok(self.get(key)?.is_some())
    }

    /// Store `value` under `key` if the current version matches `expected`.
    ///
    /// Returns the new version.
    fn put_if_version(
        &self,
        key: &str,
        expected: ExpectedVersion,
        value: Vec<u8>,
    ) -> Result<u64, LedgerError>;

    /// Unconditionally store `value` under `key`. Returns the new version.
    fn put(&self, key: &str, value: Vec<u8>) -> Result<u64, LedgerError> {
        self.put_if_version(key, ExpectedVersion::Any, value)
    }
}

impl<L> Ledger for Arc<L>
where
    L: Ledger + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<LedgerEntry>, LedgerError> {
        (**self).get(key)
    }

    fn exists(&self, key: &str) -> Result<bool, LedgerError> {
        (**self).exists(key)
    }

    fn put_if_version(
        &self,
        key: &str,
        expected: ExpectedVersion,
        value: Vec<u8>,
    ) -> Result<u64, LedgerError> {
        (**self).put_if_version(key, expected, value)
    }

    fn put(&self, key: &str, value: Vec<u8>) -> Result<u64, LedgerError> {
        (**self).put(key, value)
    }
}
