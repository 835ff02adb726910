//! Infrastructure layer: ledger boundary, customer service, routing contract,
//! configuration.

pub mod config;
pub mod contract;
pub mod ledger;
pub mod service;


pub use config::ServiceConfig;
pub use contract::KycContract;
pub use ledger::{InMemoryLedger, Ledger, LedgerEntry, LedgerError};
pub use service::{CustomerService, ServiceError};
