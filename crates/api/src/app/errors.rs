use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use kyc_infra::ServiceError;

pub fn service_error_status(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::Decode(_)
        | ServiceError::Validation(_)
        | ServiceError::InvalidArguments(_)
        | ServiceError::UnknownSection(_)
        | ServiceError::UnknownMode(_)
        | ServiceError::UnsupportedMode { .. } => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) | ServiceError::UnknownFunction(_) => StatusCode::NOT_FOUND,
        ServiceError::DuplicateKey(_) | ServiceError::Conflict(_) => StatusCode::CONFLICT,
        ServiceError::InvariantViolation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::Ledger(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    let status = service_error_status(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "request failed");
    } else {
        tracing::debug!(error = %err, code = err.code(), "request rejected");
    }
    json_error(status, err.code(), err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
