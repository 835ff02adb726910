//! Value object trait: equality by value, not identity.
//!
//! Profile sections (identity, addresses, contacts, ...) are value objects:
//! entries have no identifier of their own, so two entries with the same
//! attributes are the same entry. Their position in a section is their only
//! handle.

/// Marker trait for value objects.
///
/// Required by the patch layer for anything it merges into a record: entries
/// must be cloneable (replace/append produce a new record), comparable by value
/// (idempotence checks) and debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
