//! ProxyHandler - Handles one proxied fetch
//!
//! Validates the `url` query parameter, forwards the request to the origin with
//! the client's headers (minus host, origin and compression negotiation), and
//! wraps the origin response in permissive CORS headers with a base64 body.
//! Validation failures are answered with a 400; fetch failures fail the
//! invocation.

use cors_proxy_common::{ProxyRequest, ProxyResponse, Result, validate_target_url};
use tracing::{error, info, warn};

use crate::fetch::Fetch;
use crate::{build_outbound_request, build_proxy_response};

/// Handler for proxy requests
pub async fn handle_proxy<F: Fetch>(request: &ProxyRequest, fetcher: &F) -> Result<ProxyResponse> {
    info!(
        "Got request with params: {:?}",
        request.query_string_parameters
    );

    let url = match validate_target_url(request.target_url()) {
        Ok(url) => url,
        Err(e) => {
            warn!("Rejecting request: {}", e);
            return Ok(ProxyResponse::bad_request(e.to_string()));
        }
    };

    let outbound = build_outbound_request(request, url)?;

    let fetched = fetcher.fetch(outbound).await.inspect_err(|e| {
        error!("Failed to fetch {}: {}", url, e);
    })?;

    info!("Got response from {} ---> status {}", url, fetched.status);

    build_proxy_response(fetched, request.has_body())
}
