//! Cross-origin policy for the browser client.

use actix_cors::Cors;

use crate::domain::TRACE_ID_HEADER;

/// Preflight responses may be cached for an hour.
const PREFLIGHT_MAX_AGE_SECS: usize = 3600;

/// Build the CORS middleware.
///
/// Any origin, method and request header is accepted and the wildcard origin
/// is sent back. Credentials are not supported. The `trace-id` header is
/// exposed so browser code can quote it.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_api::middleware::cors;
///
/// let _app = App::new().wrap(cors());
/// ```
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .expose_headers([TRACE_ID_HEADER])
        .max_age(PREFLIGHT_MAX_AGE_SECS)
}
