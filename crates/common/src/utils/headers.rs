use crate::constants::STRIPPED_HEADERS;
use http::{HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;

/// Check whether an inbound header must not reach the origin
///
/// Covers `Host`, `Origin` and `Accept-Encoding` in any letter case.
pub fn is_stripped_header(name: &str) -> bool {
    STRIPPED_HEADERS
        .iter()
        .any(|stripped| name.eq_ignore_ascii_case(stripped))
}

/// Build the header set sent to the origin from the inbound headers
///
/// Stripped headers are dropped; names or values that are not valid HTTP are
/// skipped.
pub fn forward_headers(inbound: &HashMap<String, String>) -> HeaderMap {
    let mut headers = HeaderMap::new();

    for (name, value) in inbound.iter() {
        if is_stripped_header(name) {
            continue;
        }

        if let Ok(header_name) = HeaderName::from_bytes(name.as_bytes())
            && let Ok(header_value) = HeaderValue::from_str(value)
        {
            headers.append(header_name, header_value);
        }
    }

    headers
}
