//! HTTP API: server wiring, routing, and request/response mapping around the
//! KYC contract.

pub mod app;
pub mod config;
