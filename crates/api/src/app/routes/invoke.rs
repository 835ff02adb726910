use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::app::{AppContract, dto, errors};

/// Forward a contract invocation and return its JSON bytes unchanged.
pub async fn invoke(
    Extension(contract): Extension<Arc<AppContract>>,
    body: Result<Json<dto::InvokeRequest>, JsonRejection>,
) -> axum::response::Response {
    let dto::InvokeRequest { function, args } = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "invoke body rejected");
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_request",
                rejection.body_text(),
            );
        }
    };
    tracing::debug!(%function, args = args.len(), "invoke");

    // Ledger access is synchronous; keep it off the async workers.
    let result =
        tokio::task::spawn_blocking(move || contract.invoke(&function, args.as_slice())).await;

    match result {
        Ok(Ok(bytes)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            bytes,
        )
            .into_response(),
        Ok(Err(e)) => errors::service_error_to_response(e),
        Err(join) => {
            tracing::error!(error = %join, "contract task failed");
            errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "contract invocation did not complete",
            )
        }
    }
}
