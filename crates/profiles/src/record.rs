use serde::{Deserialize, Serialize};

use kyc_core::{CustomerId, DomainError, DomainResult, ValueObject};

use crate::section::SectionName;

/// Identity section: exactly one per record, replace-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase", deny_unknown_fields)]
pub struct IdentityInfo {
    pub salutation: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    /// Date of birth as seconds since the Unix epoch.
    pub date_of_birth: u64,
    pub gender: String,
    /// National identifier.
    #[serde(rename = "SSN")]
    pub ssn: String,
    pub verified: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase", deny_unknown_fields)]
pub struct AddressEntry {
    pub street1: String,
    pub street2: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip: String,
    pub verified: bool,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase", deny_unknown_fields)]
pub struct ContactEntry {
    pub contact_type: String,
    pub phone_number: String,
    pub email_address: String,
    pub verified: bool,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase", deny_unknown_fields)]
pub struct DocumentEntry {
    pub document_type: String,
    pub document_id: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase", deny_unknown_fields)]
pub struct BankAccountEntry {
    pub account_no: String,
    pub bank_name: String,
    pub bank_branch_name: String,
    pub street1: String,
    pub street2: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase", deny_unknown_fields)]
pub struct BankTransactionEntry {
    #[serde(rename = "TransactionID")]
    pub transaction_id: String,
    /// Seconds since the Unix epoch.
    pub transaction_date: u64,
    pub transaction_type: String,
    pub description: String,
    /// Amount in minor currency units; negative for debits.
    pub amount: i64,
}

impl ValueObject for IdentityInfo {}
impl ValueObject for AddressEntry {}
impl ValueObject for ContactEntry {}
impl ValueObject for DocumentEntry {}
impl ValueObject for BankAccountEntry {}
impl ValueObject for BankTransactionEntry {}

/// Aggregate root: one customer profile, stored as a single ledger value.
///
/// Fields are private so the identifier cannot be rewritten once assigned;
/// sections change only through [`crate::patch::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CustomerRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<CustomerId>,
    identity: IdentityInfo,
    #[serde(default)]
    addresses: Vec<AddressEntry>,
    #[serde(default)]
    contacts: Vec<ContactEntry>,
    #[serde(default)]
    documents: Vec<DocumentEntry>,
    #[serde(default)]
    bank_accounts: Vec<BankAccountEntry>,
    #[serde(default)]
    bank_transactions: Vec<BankTransactionEntry>,
}

impl CustomerRecord {
    /// Build the record a registration produces: identity plus one address and
    /// one contact, every other section empty, identifier not yet assigned.
    pub fn new_registration(
        identity: IdentityInfo,
        first_address: AddressEntry,
        first_contact: ContactEntry,
    ) -> Self {
        Self {
            id: None,
            identity,
            addresses: vec![first_address],
            contacts: vec![first_contact],
            documents: Vec::new(),
            bank_accounts: Vec::new(),
            bank_transactions: Vec::new(),
        }
    }

    /// Assign the identifier. Re-assigning the same identifier is a no-op;
    /// assigning a different one violates identifier immutability.
    pub fn with_id(mut self, id: CustomerId) -> DomainResult<Self> {
        match &self.id {
            Some(existing) if *existing != id => Err(DomainError::invariant(format!(
                "customer id is immutable (current: {existing}, attempted: {id})"
            ))),
            _ => {
                self.id = Some(id);
                Ok(self)
            }
        }
    }

    /// Decode a stored record.
    pub fn decode(bytes: &[u8]) -> DomainResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Encode for storage.
    pub fn encode(&self) -> Vec<u8> {
        // Every field is a string, integer, bool or a sequence of those, so
        // serialization cannot fail.
        serde_json::to_vec(self).expect("customer record serialization is infallible")
    }

    pub fn id(&self) -> Option<&CustomerId> {
        self.id.as_ref()
    }

    pub fn identity(&self) -> &IdentityInfo {
        &self.identity
    }

    pub fn addresses(&self) -> &[AddressEntry] {
        &self.addresses
    }

    pub fn contacts(&self) -> &[ContactEntry] {
        &self.contacts
    }

    pub fn documents(&self) -> &[DocumentEntry] {
        &self.documents
    }

    pub fn bank_accounts(&self) -> &[BankAccountEntry] {
        &self.bank_accounts
    }

    pub fn bank_transactions(&self) -> &[BankTransactionEntry] {
        &self.bank_transactions
    }

    /// Number of entries in a section (identity always counts as one).
    pub fn section_len(&self, section: SectionName) -> usize {
        match section {
            SectionName::Identity => 1,
            SectionName::Addresses => self.addresses.len(),
            SectionName::Contacts => self.contacts.len(),
            SectionName::Documents => self.documents.len(),
            SectionName::BankAccounts => self.bank_accounts.len(),
            SectionName::BankTransactions => self.bank_transactions.len(),
        }
    }

    /// JSON view of a single section: an object for identity, an array for
    /// every collection section.
    pub fn section_view(&self, section: SectionName) -> DomainResult<serde_json::Value> {
        let value = match section {
            SectionName::Identity => serde_json::to_value(&self.identity)?,
            SectionName::Addresses => serde_json::to_value(&self.addresses)?,
            SectionName::Contacts => serde_json::to_value(&self.contacts)?,
            SectionName::Documents => serde_json::to_value(&self.documents)?,
            SectionName::BankAccounts => serde_json::to_value(&self.bank_accounts)?,
            SectionName::BankTransactions => serde_json::to_value(&self.bank_transactions)?,
        };
        Ok(value)
    }

    pub(crate) fn identity_mut(&mut self) -> &mut IdentityInfo {
        &mut self.identity
    }

    pub(crate) fn addresses_mut(&mut self) -> &mut Vec<AddressEntry> {
        &mut self.addresses
    }

    pub(crate) fn contacts_mut(&mut self) -> &mut Vec<ContactEntry> {
        &mut self.contacts
    }

    pub(crate) fn documents_mut(&mut self) -> &mut Vec<DocumentEntry> {
        &mut self.documents
    }

    pub(crate) fn bank_accounts_mut(&mut self) -> &mut Vec<BankAccountEntry> {
        &mut self.bank_accounts
    }

    pub(crate) fn bank_transactions_mut(&mut self) -> &mut Vec<BankTransactionEntry> {
        &mut self.bank_transactions
    }
}
