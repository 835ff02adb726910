use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard};

use chrono::Utc;
use tracing::debug;

use kyc_core::ExpectedVersion;

use super::r#trait::{Ledger, LedgerEntry, LedgerError};

/// In-memory versioned key-value ledger.
///
/// Intended for tests/dev. Writes are serialised by a single lock, so the
/// version check and the write in `put_if_version` happen atomically.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    entries: RwLock<HashMap<String, LedgerEntry>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> Result<usize, LedgerError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, LedgerError> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, LedgerEntry>>, LedgerError> {
        self.entries
            .read()
            .map_err(|_| LedgerError::Backend("lock poisoned".to_string()))
    }
}

impl Ledger for InMemoryLedger {
    fn get(&self, key: &str) -> Result<Option<LedgerEntry>, LedgerError> {
        Ok(self.read()?.get(key).cloned())
    }

    fn put_if_version(
        &self,
        key: &str,
        expected: ExpectedVersion,
        value: Vec<u8>,
    ) -> Result<u64, LedgerError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| LedgerError::Backend("lock poisoned".to_string()))?;

        let current = entries.get(key).map(|e| e.version).unwrap_or(0);
        if !expected.matches(current) {
            return Err(LedgerError::Concurrency(format!(
                "key '{key}': expected {expected:?}, found {current}"
            )));
        }

        let version = current + 1;
        entries.insert(
            key.to_string(),
            LedgerEntry {
                key: key.to_string(),
                version,
                value,
                updated_at: Utc::now(),
            },
        );
        debug!(key, version, "ledger value stored");

        Ok(version)
    }
}
