//! Function-name routing over flat string argument lists.
//!
//! Mirrors the ledger-contract command surface:
//!
//! | function           | args                                     |
//! |--------------------|------------------------------------------|
//! | `registerCustomer` | key, identityJSON, addressJSON, contactJSON |
//! | `updateCustomer`   | section, mode, key, payloadJSON          |
//! | `queryCustomer`    | key [, section]                          |
//!
//! Every successful call answers with JSON bytes: the stored record, or the
//! selected section for a sectioned query.

use tracing::debug;

use kyc_profiles::{OperationMode, SectionName};

use crate::ledger::Ledger;
use crate::service::{CustomerService, ServiceError};

pub const REGISTER_CUSTOMER: &str = "registerCustomer";
pub const UPDATE_CUSTOMER: &str = "updateCustomer";
pub const QUERY_CUSTOMER: &str = "queryCustomer";

/// Routes contract invocations to a [`CustomerService`].
#[derive(Debug)]
pub struct KycContract<L> {
    service: CustomerService<L>,
}

impl<L> KycContract<L> {
    pub fn new(service: CustomerService<L>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &CustomerService<L> {
        &self.service
    }
}

impl<L> KycContract<L>
where
    L: Ledger,
{
    pub fn invoke<S: AsRef<str>>(
        &self,
        function: &str,
        args: &[S],
    ) -> Result<Vec<u8>, ServiceError> {
        debug!(function, args = args.len(), "contract invoked");
        match function {
            REGISTER_CUSTOMER => self.register_customer(args),
            UPDATE_CUSTOMER => self.update_customer(args),
            QUERY_CUSTOMER => self.query_customer(args),
            other => Err(ServiceError::UnknownFunction(other.to_string())),
        }
    }

    pub fn register_customer<S: AsRef<str>>(&self, args: &[S]) -> Result<Vec<u8>, ServiceError> {
        let [key, identity, address, contact] = expect_args::<S, 4>(REGISTER_CUSTOMER, args)?;
        let record = self.service.register(
            key,
            identity.as_bytes(),
            address.as_bytes(),
            contact.as_bytes(),
        )?;
        Ok(record.encode())
    }

    pub fn update_customer<S: AsRef<str>>(&self, args: &[S]) -> Result<Vec<u8>, ServiceError> {
        let [section, mode, key, payload] = expect_args::<S, 4>(UPDATE_CUSTOMER, args)?;
        let section: SectionName = section.parse()?;
        let mode: OperationMode = mode.parse()?;
        let record = self.service.update(key, section, mode, payload.as_bytes())?;
        Ok(record.encode())
    }

    pub fn query_customer<S: AsRef<str>>(&self, args: &[S]) -> Result<Vec<u8>, ServiceError> {
        match args {
            [key] => Ok(self.service.query(key.as_ref())?.encode()),
            [key, section] => {
                let section: SectionName = section.as_ref().parse()?;
                let view = self.service.query_section(key.as_ref(), section)?;
                Ok(view.to_string().into_bytes())
            }
            _ => Err(ServiceError::InvalidArguments(format!(
                "{QUERY_CUSTOMER} expects 1 or 2 arguments (key [, section]), got {}",
                args.len()
            ))),
        }
    }
}

fn expect_args<'a, S: AsRef<str>, const N: usize>(
    function: &str,
    args: &'a [S],
) -> Result<[&'a str; N], ServiceError> {
    if args.len() != N {
        return Err(ServiceError::InvalidArguments(format!(
            "{function} expects {N} arguments, got {}",
            args.len()
        )));
    }
    Ok(core::array::from_fn(|i| args[i].as_ref()))
}
