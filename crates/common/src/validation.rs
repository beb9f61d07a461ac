//! Validation of the proxy target
//!
//! Both checks run before any outbound call is made. A failure here is answered
//! with a 400 response whose body is the error's `Display` text.

use crate::constants::{ALLOWED_SUFFIXES, DISALLOWED_RESOURCE_MESSAGE, MISSING_URL_MESSAGE};
use thiserror::Error;

/// Validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", MISSING_URL_MESSAGE)]
    MissingUrl,

    #[error("{}", DISALLOWED_RESOURCE_MESSAGE)]
    DisallowedResource,
}

/// Check whether a target ends in one of the allowed file extensions
///
/// Matching is an exact, case-sensitive suffix comparison.
///
/// # Examples
///
/// ```
/// use cors_proxy_common::validation::is_allowed_resource;
///
/// assert!(is_allowed_resource("https://example.com/game.hex"));
/// assert!(!is_allowed_resource("https://example.com/game.HEX"));
/// assert!(!is_allowed_resource("https://example.com/"));
/// ```
pub fn is_allowed_resource(url: &str) -> bool {
    ALLOWED_SUFFIXES.iter().any(|suffix| url.ends_with(suffix))
}

/// Validate the `url` query parameter and return it
///
/// An empty value counts as missing.
pub fn validate_target_url(url: Option<&str>) -> Result<&str, ValidationError> {
    let url = url
        .filter(|u| !u.is_empty())
        .ok_or(ValidationError::MissingUrl)?;

    if !is_allowed_resource(url) {
        return Err(ValidationError::DisallowedResource);
    }

    Ok(url)
}
