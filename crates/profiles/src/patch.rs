//! Section patches: the single entry point for modifying a stored record.
//!
//! A patch names a section, a mode and a JSON payload. The payload is decoded
//! into the section's shape first; only a fully decoded patch is merged, and
//! it is merged into a copy, so a failed patch never yields a half-updated
//! record.

use serde::de::DeserializeOwned;

use kyc_core::{DomainError, DomainResult, ValueObject};

use crate::payload;
use crate::record::{
    AddressEntry, BankAccountEntry, BankTransactionEntry, ContactEntry, CustomerRecord,
    DocumentEntry, IdentityInfo,
};
use crate::section::{OperationMode, SectionName};

/// A decoded payload, typed by the section it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionPatch {
    Identity(IdentityInfo),
    Addresses(Vec<AddressEntry>),
    Contacts(Vec<ContactEntry>),
    Documents(Vec<DocumentEntry>),
    BankAccounts(Vec<BankAccountEntry>),
    BankTransactions(Vec<BankTransactionEntry>),
}

impl SectionPatch {
    /// Decode `payload` into the shape `section` expects: one object for the
    /// identity, an array of entries for every collection section (even for a
    /// single entry).
    pub fn decode(section: SectionName, payload: &[u8]) -> DomainResult<Self> {
        let patch = match section {
            SectionName::Identity => SectionPatch::Identity(decode_one(section, payload)?),
            SectionName::Addresses => SectionPatch::Addresses(decode_many(section, payload)?),
            SectionName::Contacts => SectionPatch::Contacts(decode_many(section, payload)?),
            SectionName::Documents => SectionPatch::Documents(decode_many(section, payload)?),
            SectionName::BankAccounts => {
                SectionPatch::BankAccounts(decode_many(section, payload)?)
            }
            SectionName::BankTransactions => {
                SectionPatch::BankTransactions(decode_many(section, payload)?)
            }
        };
        Ok(patch)
    }

    fn merge_into(self, record: &mut CustomerRecord, mode: OperationMode) {
        match self {
            // Callers have already rejected Append for the identity.
            SectionPatch::Identity(identity) => *record.identity_mut() = identity,
            SectionPatch::Addresses(entries) => merge(record.addresses_mut(), entries, mode),
            SectionPatch::Contacts(entries) => merge(record.contacts_mut(), entries, mode),
            SectionPatch::Documents(entries) => merge(record.documents_mut(), entries, mode),
            SectionPatch::BankAccounts(entries) => {
                merge(record.bank_accounts_mut(), entries, mode)
            }
            SectionPatch::BankTransactions(entries) => {
                merge(record.bank_transactions_mut(), entries, mode)
            }
        }
    }
}

/// Apply a patch to `existing` and return the updated record.
///
/// - Identity accepts only [`OperationMode::Replace`]; `Append` fails with
///   [`DomainError::UnsupportedMode`] before the payload is looked at.
/// - Collections under `Append` keep existing entries first, new entries after,
///   in payload order.
/// - Collections under `Replace` take the payload sequence verbatim.
///
/// `existing` is never mutated and the record identifier is never touched.
pub fn apply(
    existing: &CustomerRecord,
    section: SectionName,
    mode: OperationMode,
    payload: &[u8],
) -> DomainResult<CustomerRecord> {
    if !section.supports(mode) {
        return Err(DomainError::unsupported_mode(section.as_str(), mode.as_str()));
    }

    let patch = SectionPatch::decode(section, payload)?;

    let mut updated = existing.clone();
    patch.merge_into(&mut updated, mode);
    Ok(updated)
}

fn merge<T: ValueObject>(target: &mut Vec<T>, entries: Vec<T>, mode: OperationMode) {
    match mode {
        OperationMode::Append => target.extend(entries),
        OperationMode::Replace => *target = entries,
    }
}

fn decode_one<T: DeserializeOwned>(section: SectionName, bytes: &[u8]) -> DomainResult<T> {
    payload::decode_object(bytes)
        .map_err(|e| DomainError::decode(format!("{section} payload: {e}")))
}

fn decode_many<T: DeserializeOwned>(section: SectionName, bytes: &[u8]) -> DomainResult<Vec<T>> {
    payload::decode_object_list(bytes)
        .map_err(|e| DomainError::decode(format!("{section} payload: {e}")))
}
