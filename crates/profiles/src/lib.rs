//! KYC profile domain module (customer records and section patches).
//!
//! This crate contains the canonical customer record schema and the rules for
//! merging partial updates into it, implemented purely as deterministic domain
//! logic (no IO, no storage, no logging).

pub mod patch;
pub mod payload;
pub mod record;
pub mod section;

pub use patch::{SectionPatch, apply};
pub use payload::{decode_object, decode_object_list};
pub use record::{
    AddressEntry, BankAccountEntry, BankTransactionEntry, ContactEntry, CustomerRecord,
    DocumentEntry, IdentityInfo,
};
pub use section::{OperationMode, SectionName};
