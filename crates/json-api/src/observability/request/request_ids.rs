//! Request ID resolution and response header helpers.

use salvo::{
    http::{StatusCode, header::HeaderValue},
    prelude::Response,
};
use tracing::warn;
use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest caller-supplied request id that is echoed back.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Reuse the caller's request id when it is usable, otherwise mint a UUIDv7.
pub(super) fn resolve_request_id(header_value: Option<String>) -> String {
    header_value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty() && value.len() <= MAX_REQUEST_ID_LEN)
        .unwrap_or_else(|| Uuid::now_v7().to_string())
}

pub(super) fn set_request_id_header(res: &mut Response, request_id: &str) {
    match HeaderValue::from_str(request_id) {
        Ok(value) => {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        Err(source) => {
            warn!(request_id, "could not encode request id header: {source}");
        }
    }
}

/// Handlers that never set a status leave the default 200 in place.
pub(super) fn response_status_or_ok(status_code: Option<StatusCode>) -> StatusCode {
    status_code.unwrap_or(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_request_id_is_trimmed_and_kept() {
        assert_eq!(resolve_request_id(Some(" abc-123 ".to_owned())), "abc-123");
    }

    #[test]
    fn blank_or_oversized_ids_are_replaced() {
        for header in [None, Some("   ".to_owned()), Some("x".repeat(200))] {
            let resolved = resolve_request_id(header);

            assert!(Uuid::try_parse(&resolved).is_ok(), "expected uuid, got {resolved}");
        }
    }

    #[test]
    fn missing_status_defaults_to_ok() {
        assert_eq!(response_status_or_ok(None), StatusCode::OK);
        assert_eq!(
            response_status_or_ok(Some(StatusCode::NOT_FOUND)),
            StatusCode::NOT_FOUND
        );
    }
}
