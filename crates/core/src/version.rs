//! Optimistic concurrency primitives for single-key read-modify-write.

/// Optimistic concurrency expectation for a stored value.
///
/// Versions are assigned by the ledger: `0` means "no value stored", the first
/// write produces version `1`, and every later write increments by one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExpectedVersion {
    /// Skip version checking (unconditional overwrite).
    Any,
    /// Require that no value is stored under the key yet.
    Absent,
    /// Require the stored value to be at an exact version.
    Exact(u64),
}

impl ExpectedVersion {
    pub fn matches(self, actual: u64) -> bool {
        match self {
            ExpectedVersion::Any => true,
            ExpectedVersion::Absent => actual == 0,
            ExpectedVersion::Exact(v) => v == actual,
        }
    }
}
