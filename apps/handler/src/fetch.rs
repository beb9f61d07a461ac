//! Outbound fetch
//!
//! The proxy makes exactly one HTTP call per invocation. [`Fetch`] is the seam
//! that call goes through: [`ReqwestFetcher`] in production, an in-memory double
//! in tests.

use cors_proxy_common::{ProxyError, Result};
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue, Method};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// A fully prepared request to the origin
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub url: String,
    pub method: Method,
    pub headers: HeaderMap,
    pub timeout: Duration,
}

/// What the proxy keeps from the origin response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedResponse {
    pub status: u16,

    /// Raw `content-type` value, if the origin sent one
    pub content_type: Option<String>,

    /// Decompressed body, byte for byte
    pub body: Vec<u8>,
}

/// Performs the single outbound HTTP call
///
/// Implementations must decompress transparently, capture the body as raw
/// bytes, honor `request.timeout`, and report any transport failure as
/// [`ProxyError::Upstream`] carrying the original error.
pub trait Fetch {
    fn fetch(
        &self,
        request: OutboundRequest,
    ) -> impl Future<Output = Result<FetchedResponse>> + Send;
}

/// [`Fetch`] over a shared `reqwest` client with gzip/deflate support
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new() -> reqwest::Result<Self> {
        let client = Client::builder().gzip(true).deflate(true).build()?;
        Ok(Self { client })
    }
}

impl Fetch for ReqwestFetcher {
    async fn fetch(&self, request: OutboundRequest) -> Result<FetchedResponse> {
        debug!("Fetching: {} {}", request.method, request.url);

        let response = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers)
            .timeout(request.timeout)
            .send()
            .await
            .map_err(ProxyError::upstream)?;

        let status = response.status().as_u16();
        let content_type = response.headers().get(CONTENT_TYPE).map(latin1_value);

        let body = response.bytes().await.map_err(ProxyError::upstream)?;

        Ok(FetchedResponse {
            status,
            content_type,
            body: body.to_vec(),
        })
    }
}

/// Header value as text, reading each byte as latin1 so obs-text survives
fn latin1_value(value: &HeaderValue) -> String {
    value.as_bytes().iter().map(|&b| char::from(b)).collect()
}
