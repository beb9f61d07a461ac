//! CORS Proxy Lambda Handler
//!
//! Receives API Gateway proxy events (payload format 1.0 or 2.0), fetches the
//! file named by the `url` query parameter and returns it base64-encoded with
//! permissive CORS headers.

use cors_proxy_handler::handlers::handle_proxy;
use cors_proxy_handler::{ReqwestFetcher, parse_event};
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Parse the event, run the proxy and serialize its response
async fn function_handler(
    event: LambdaEvent<Value>,
    fetcher: &ReqwestFetcher,
) -> Result<Value, Error> {
    debug!("Invocation {}", event.context.request_id);

    let request = parse_event(event.payload)?;
    let response = handle_proxy(&request, fetcher).await?;

    serde_json::to_value(response)
        .map_err(|e| format!("Failed to serialize response: {}", e).into())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // CloudWatch adds its own timestamps
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    info!("CORS proxy handler starting");

    let fetcher = ReqwestFetcher::new()?;

    run(service_fn(|event: LambdaEvent<Value>| {
        function_handler(event, &fetcher)
    }))
    .await
}
