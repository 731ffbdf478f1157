//! Email address format predicate.

use std::sync::OnceLock;

use regex::Regex;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Local part, a single `@`, then a dotted domain ending in an
        // alphabetic top-level label of two or more characters.
        let pattern = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Return `true` when `email` has the shape `local-part@domain.tld`.
///
/// This is a syntactic check only; deliverability is never probed.
///
/// # Examples
/// ```
/// use users_api::domain::email::is_valid_email;
///
/// assert!(is_valid_email("ann@example.com"));
/// assert!(!is_valid_email("not-an-email"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}
