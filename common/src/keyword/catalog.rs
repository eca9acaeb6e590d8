//! The fixed keyword vocabulary and the status each token resolves to.

use super::ErrorKeyword;
use crate::HttpStatusCode;

pub const BAD_REQUEST: ErrorKeyword = ErrorKeyword::new("{bad-request}");
pub const INVALID_ARGS: ErrorKeyword = ErrorKeyword::new("{invalid-args}");
pub const NOT_JSON: ErrorKeyword = ErrorKeyword::new("{not-json}");
pub const AUTH: ErrorKeyword = ErrorKeyword::new("{auth}");
pub const AUTH_EXPIRED: ErrorKeyword = ErrorKeyword::new("{auth-expired}");
pub const FORBIDDEN: ErrorKeyword = ErrorKeyword::new("{forbidden}");
pub const NOT_FOUND: ErrorKeyword = ErrorKeyword::new("{not-found}");
pub const DEVICE_NOEXIST: ErrorKeyword = ErrorKeyword::new("{device-noexist}");
pub const TIMEOUT: ErrorKeyword = ErrorKeyword::new("{timeout}");
pub const CONFLICT: ErrorKeyword = ErrorKeyword::new("{conflict}");
pub const EXISTS: ErrorKeyword = ErrorKeyword::new("{exists}");
pub const GONE: ErrorKeyword = ErrorKeyword::new("{gone}");
pub const TOO_BIG: ErrorKeyword = ErrorKeyword::new("{too-big}");
pub const INTERNAL: ErrorKeyword = ErrorKeyword::new("{internal}");
pub const NOT_IMPLEMENTED: ErrorKeyword = ErrorKeyword::new("{not-implemented}");
pub const UPSTREAM: ErrorKeyword = ErrorKeyword::new("{upstream}");
pub const UNAVAILABLE: ErrorKeyword = ErrorKeyword::new("{unavailable}");
pub const DEVICE_OFFLINE: ErrorKeyword = ErrorKeyword::new("{device-offline}");
pub const DEVICE_TIMEOUT: ErrorKeyword = ErrorKeyword::new("{device-timeout}");

/// Every catalog keyword paired with its status, in registration order.
pub const STANDARD_KEYWORDS: &[(ErrorKeyword, HttpStatusCode)] = &[
    (BAD_REQUEST, HttpStatusCode::BAD_REQUEST),
    (INVALID_ARGS, HttpStatusCode::BAD_REQUEST),
    (NOT_JSON, HttpStatusCode::BAD_REQUEST),
    (AUTH, HttpStatusCode::UNAUTHORIZED),
    (AUTH_EXPIRED, HttpStatusCode::UNAUTHORIZED),
    (FORBIDDEN, HttpStatusCode::FORBIDDEN),
    (NOT_FOUND, HttpStatusCode::NOT_FOUND),
    (DEVICE_NOEXIST, HttpStatusCode::NOT_FOUND),
    (TIMEOUT, HttpStatusCode::REQUEST_TIMEOUT),
    (CONFLICT, HttpStatusCode::CONFLICT),
    (EXISTS, HttpStatusCode::CONFLICT),
    (GONE, HttpStatusCode::GONE),
    (TOO_BIG, HttpStatusCode::PAYLOAD_TOO_LARGE),
    (INTERNAL, HttpStatusCode::INTERNAL_SERVER_ERROR),
    (NOT_IMPLEMENTED, HttpStatusCode::NOT_IMPLEMENTED),
    (UPSTREAM, HttpStatusCode::BAD_GATEWAY),
    (UNAVAILABLE, HttpStatusCode::SERVICE_UNAVAILABLE),
    (DEVICE_OFFLINE, HttpStatusCode::SERVICE_UNAVAILABLE),
    (DEVICE_TIMEOUT, HttpStatusCode::GATEWAY_TIMEOUT),
];
