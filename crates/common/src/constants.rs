/// Outbound request timeout (20 seconds, under API Gateway's 29s integration limit)
pub const REQUEST_TIMEOUT_MS: u64 = 20_000;

/// File extensions the proxy is willing to fetch
pub const ALLOWED_SUFFIXES: &[&str] = &[".hex", ".arduboy", ".bin", ".json"];

/// Inbound headers never forwarded to the origin (matched case-insensitively)
pub const STRIPPED_HEADERS: &[&str] = &["host", "origin", "accept-encoding"];

/// Query parameter carrying the target URL
pub const URL_PARAM: &str = "url";

/// Response body when the `url` query parameter is missing
pub const MISSING_URL_MESSAGE: &str = "Unable get url from 'url' query parameter";

/// Response body when the target does not end in an allowed suffix
pub const DISALLOWED_RESOURCE_MESSAGE: &str = "Unable get fetch non-Arduboy file";

/// Value of `Access-Control-Allow-Origin` on proxied responses
pub const ALLOW_ORIGIN_ANY: &str = "*";

/// Value of `x-content-type-options` on proxied responses
pub const NOSNIFF: &str = "nosniff";
