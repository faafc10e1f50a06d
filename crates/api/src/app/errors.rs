use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use vitrine_core::DomainError;
use vitrine_infra::StoreError;

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

/// Unparseable or mistyped JSON bodies keep axum's status but use our error shape.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    tracing::debug!(error = %rejection, "rejected request body");
    json_error(rejection.status(), "invalid_body", rejection.body_text())
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    if err.is_client_input() {
        tracing::debug!(error = %err, "rejected request input");
    }
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
    }
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "catalog store failure");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_client_statuses() {
        let r = domain_error_to_response(DomainError::validation("price must be positive"));
        assert_eq!(r.status(), StatusCode::BAD_REQUEST);

        let r = domain_error_to_response(DomainError::invalid_id("ProductId: bad"));
        assert_eq!(r.status(), StatusCode::BAD_REQUEST);

        let r = domain_error_to_response(DomainError::not_found());
        assert_eq!(r.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_errors_are_internal() {
        let r = store_error_to_response(StoreError::Poisoned);
        assert_eq!(r.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
