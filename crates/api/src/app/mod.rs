//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use kyc_infra::{CustomerService, InMemoryLedger, KycContract, ServiceConfig};

pub mod dto;
pub mod errors;
pub mod routes;

/// Contract wired to the in-process ledger.
pub type AppContract = KycContract<Arc<InMemoryLedger>>;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: ServiceConfig) -> Router {
    let ledger = Arc::new(InMemoryLedger::new());
    let contract: Arc<AppContract> =
        Arc::new(KycContract::new(CustomerService::new(ledger, config)));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(contract))
}
