//! Customer profile operations over a ledger (application-level orchestration).
//!
//! ```text
//! register:  decode payloads -> build record -> put_if_version(Absent)
//! update:    get -> decode -> patch::apply -> put_if_version(Exact(read version))
//! query:     get -> decode
//! ```
//!
//! All merge logic lives in `kyc-profiles`; this module only moves bytes
//! between the ledger and the pure record layer, and turns version races into
//! `Conflict` errors (or bounded retries, see [`ServiceConfig`]).

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use kyc_core::{CustomerId, DomainError, ExpectedVersion};
use kyc_profiles::{
    AddressEntry, ContactEntry, CustomerRecord, IdentityInfo, OperationMode, SectionName,
    decode_object, patch,
};

use crate::config::ServiceConfig;
use crate::ledger::{Ledger, LedgerError};

/// Failure of a customer operation.
///
/// No variant ever implies a partial write: every failure is reported before
/// the ledger is touched, or by the ledger rejecting the write.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed JSON or a payload of the wrong shape.
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("unknown operation mode: {0}")]
    UnknownMode(String),
    #[error("mode {mode} is not supported for section {section}")]
    UnsupportedMode { section: String, mode: String },
    /// Invalid customer key or similar input validation failure.
    #[error("validation failed: {0}")]
    Validation(String),
    /// Stored data contradicts a record invariant (e.g. id does not match key).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
    #[error("customer '{0}' is already registered")]
    DuplicateKey(String),
    #[error("customer '{0}' not found")]
    NotFound(String),
    /// Another writer updated the key between our read and our write.
    #[error("concurrent update conflict: {0}")]
    Conflict(String),
    /// Wrong number of arguments for a contract function.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("unknown function: {0}")]
    UnknownFunction(String),
    #[error(transparent)]
    Ledger(LedgerError),
}

impl ServiceError {
    /// Stable machine-readable code, used by outer shells for error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Decode(_) => "decode_error",
            ServiceError::UnknownSection(_) => "unknown_section",
            ServiceError::UnknownMode(_) => "unknown_mode",
            ServiceError::UnsupportedMode { .. } => "unsupported_mode",
            ServiceError::Validation(_) => "validation_error",
            ServiceError::InvariantViolation(_) => "invariant_violation",
            ServiceError::DuplicateKey(_) => "duplicate_key",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::Conflict(_) => "conflict",
            ServiceError::InvalidArguments(_) => "invalid_arguments",
            ServiceError::UnknownFunction(_) => "unknown_function",
            ServiceError::Ledger(_) => "ledger_error",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Decode(msg) => ServiceError::Decode(msg),
            DomainError::UnknownSection(name) => ServiceError::UnknownSection(name),
            DomainError::UnknownMode(name) => ServiceError::UnknownMode(name),
            DomainError::UnsupportedMode { section, mode } => {
                ServiceError::UnsupportedMode { section, mode }
            }
            DomainError::InvariantViolation(msg) => ServiceError::InvariantViolation(msg),
            DomainError::InvalidId(msg) => ServiceError::Validation(msg),
        }
    }
}

impl From<LedgerError> for ServiceError {
    fn from(value: LedgerError) -> Self {
        match value {
            LedgerError::Concurrency(msg) => ServiceError::Conflict(msg),
            other => ServiceError::Ledger(other),
        }
    }
}

/// Stateless customer profile service.
///
/// Holds a ledger handle and immutable settings only, so one instance can be
/// shared (e.g. behind an `Arc`) by every concurrent request of a process.
#[derive(Debug)]
pub struct CustomerService<L> {
    ledger: L,
    config: ServiceConfig,
}

impl<L> CustomerService<L> {
    pub fn new(ledger: L, config: ServiceConfig) -> Self {
        Self { ledger, config }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn config(&self) -> ServiceConfig {
        self.config
    }
}

impl<L> CustomerService<L>
where
    L: Ledger,
{
    /// Register a new customer under `key` with an identity, a first address
    /// and a first contact.
    ///
    /// Every payload is decoded before the ledger is consulted. Registering an
    /// existing key fails with [`ServiceError::DuplicateKey`] and leaves the
    /// stored record untouched, including when a concurrent registration wins
    /// the race between the existence check and the write.
    #[instrument(skip_all, fields(key = %key))]
    pub fn register(
        &self,
        key: &str,
        identity: &[u8],
        address: &[u8],
        contact: &[u8],
    ) -> Result<CustomerRecord, ServiceError> {
        let id = CustomerId::new(key)?;
        let identity: IdentityInfo = decode_part("identity", identity)?;
        let address: AddressEntry = decode_part("address", address)?;
        let contact: ContactEntry = decode_part("contact", contact)?;

        if self.ledger.exists(id.as_str())? {
            warn!("registration rejected: key already exists");
            return Err(ServiceError::DuplicateKey(id.to_string()));
        }

        let record =
            CustomerRecord::new_registration(identity, address, contact).with_id(id.clone())?;

        match self
            .ledger
            .put_if_version(id.as_str(), ExpectedVersion::Absent, record.encode())
        {
            Ok(version) => {
                info!(version, "customer registered");
                Ok(record)
            }
            Err(LedgerError::Concurrency(_)) => {
                warn!("registration lost race: key created concurrently");
                Err(ServiceError::DuplicateKey(id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Merge `payload` into one section of the stored record and write it back.
    ///
    /// The write is guarded by the version that was read; a concurrent writer
    /// yields [`ServiceError::Conflict`] unless retries are configured, in which
    /// case the patch is re-applied to the fresh record.
    #[instrument(skip_all, fields(key = %key, section = %section, mode = %mode))]
    pub fn update(
        &self,
        key: &str,
        section: SectionName,
        mode: OperationMode,
        payload: &[u8],
    ) -> Result<CustomerRecord, ServiceError> {
        let id = CustomerId::new(key)?;
        if !section.supports(mode) {
            return Err(DomainError::unsupported_mode(section.as_str(), mode.as_str()).into());
        }

        let mut retries_left = self.config.conflict_retries;
        loop {
            let (current, version) = self.load(&id)?;
            let updated = patch::apply(&current, section, mode, payload)?;

            match self.ledger.put_if_version(
                id.as_str(),
                ExpectedVersion::Exact(version),
                updated.encode(),
            ) {
                Ok(new_version) => {
                    info!(
                        version = new_version,
                        entries = updated.section_len(section),
                        "customer section updated"
                    );
                    return Ok(updated);
                }
                Err(LedgerError::Concurrency(msg)) if retries_left > 0 => {
                    retries_left -= 1;
                    warn!(%msg, retries_left, "update lost version race, retrying");
                }
                Err(LedgerError::Concurrency(msg)) => {
                    warn!(%msg, "update lost version race");
                    return Err(ServiceError::Conflict(msg));
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Fetch and decode the record stored under `key`.
    #[instrument(skip_all, fields(key = %key))]
    pub fn query(&self, key: &str) -> Result<CustomerRecord, ServiceError> {
        let id = CustomerId::new(key)?;
        let (record, _version) = self.load(&id)?;
        Ok(record)
    }

    /// Fetch the record stored under `key` and return only one section of it.
    pub fn query_section(
        &self,
        key: &str,
        section: SectionName,
    ) -> Result<serde_json::Value, ServiceError> {
        let record = self.query(key)?;
        Ok(record.section_view(section)?)
    }

    fn load(&self, id: &CustomerId) -> Result<(CustomerRecord, u64), ServiceError> {
        let entry = self
            .ledger
            .get(id.as_str())?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;
        debug!(version = entry.version, bytes = entry.value.len(), "loaded customer record");

        let record = CustomerRecord::decode(&entry.value)?;
        if record.id() != Some(id) {
            return Err(ServiceError::InvariantViolation(format!(
                "record stored under '{id}' carries id {:?}",
                record.id().map(CustomerId::as_str)
            )));
        }

        Ok((record, entry.version))
    }
}

fn decode_part<T: DeserializeOwned>(what: &str, bytes: &[u8]) -> Result<T, ServiceError> {
    decode_object(bytes)
        .map_err(|e| ServiceError::Decode(format!("{what} payload: {e}")))
}
