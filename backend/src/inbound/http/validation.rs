//! Request validation helpers for the HTTP adapter.
//!
//! JSON extractor failures and unparsable path identifiers are turned into
//! domain [`Error`] values here so every rejection shares one response shape.

use actix_web::HttpRequest;
use actix_web::error::JsonPayloadError;
use actix_web::web::JsonConfig;
use tracing::debug;

use crate::domain::user_service::USER_NOT_FOUND;
use crate::domain::{Error, UserId};

/// Message for bodies sent without a JSON content type.
pub const NOT_JSON: &str = "Request must be JSON";
/// Message for bodies larger than the configured limit.
pub const TOO_LARGE: &str = "Request body is too large";
/// Message for bodies that fail to deserialise.
pub const INVALID_BODY: &str = "Invalid request body";

/// Build the JSON extractor configuration shared by every handler.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_api::inbound::http::validation::json_config;
///
/// let _app = App::new().app_data(json_config(32 * 1024));
/// ```
#[must_use]
pub fn json_config(limit: usize) -> JsonConfig {
    JsonConfig::default()
        .limit(limit)
        .error_handler(|err, req| json_error(err, req).into())
}

fn json_error(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!(error = %err, path = %req.path(), "rejected request body");
    match err {
        JsonPayloadError::ContentType => Error::invalid_request(NOT_JSON),
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            Error::invalid_request(TOO_LARGE)
        }
        JsonPayloadError::Deserialize(source) => {
            Error::invalid_request(INVALID_BODY).with_details([source.to_string()])
        }
        other => Error::invalid_request(INVALID_BODY).with_details([other.to_string()]),
    }
}

/// Parse a path segment into a [`UserId`].
///
/// Segments that are not UUIDs cannot name a stored user, so they are
/// reported as not found rather than as malformed input.
pub fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|err| {
        debug!(error = %err, id = raw, "path id is not a user id");
        Error::not_found(USER_NOT_FOUND)
    })
}
