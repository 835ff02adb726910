use axum::{Router, routing::post};

pub mod invoke;
pub mod system;

/// Router for the contract endpoints.
pub fn router() -> Router {
    Router::new().route("/invoke", post(invoke::invoke))
}
