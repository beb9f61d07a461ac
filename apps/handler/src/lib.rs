//! Shared pieces of the CORS proxy handler
//!
//! This module provides the request/response transformations around the single
//! outbound fetch. Both the Lambda binary and the local invocation tool drive
//! [`handlers::handle_proxy`] through these helpers.

use cors_proxy_common::constants::REQUEST_TIMEOUT_MS;
use cors_proxy_common::{
    ProxyError, ProxyRequest, ProxyResponse, Result, body_to_json, encode_body, forward_headers,
};
use http::Method;
use serde_json::Value;
use std::time::Duration;

pub mod fetch;
pub mod handlers;

pub use fetch::{Fetch, FetchedResponse, OutboundRequest, ReqwestFetcher};

/// Parse a raw invocation payload into a proxy request
pub fn parse_event(payload: Value) -> Result<ProxyRequest> {
    serde_json::from_value(payload).map_err(|e| ProxyError::InvalidEvent(e.to_string()))
}

/// Build the outbound request for a validated target URL
///
/// All inbound headers except host, origin and accept-encoding are copied,
/// `content-length` included, but the inbound body is never sent. A request
/// that carried a body therefore announces bytes the origin never receives and
/// usually ends in the outbound timeout.
pub fn build_outbound_request(request: &ProxyRequest, url: &str) -> Result<OutboundRequest> {
    let method_name = request.method().to_ascii_uppercase();
    let method = Method::from_bytes(method_name.as_bytes())
        .map_err(|_| ProxyError::InvalidMethod(request.method().to_string()))?;

    Ok(OutboundRequest {
        url: url.to_string(),
        method,
        headers: forward_headers(&request.headers),
        timeout: Duration::from_millis(REQUEST_TIMEOUT_MS),
    })
}

/// Convert the origin response into the proxied API Gateway response
///
/// When `echo_body` is set the captured body is replaced by its JSON
/// serialization before encoding.
pub fn build_proxy_response(fetched: FetchedResponse, echo_body: bool) -> Result<ProxyResponse> {
    let body = if echo_body {
        encode_body(&body_to_json(&fetched.body)?)
    } else {
        encode_body(&fetched.body)
    };

    Ok(ProxyResponse::proxied(
        fetched.status,
        fetched.content_type,
        body,
    ))
}
