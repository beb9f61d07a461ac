use anyhow::{Context, Result, bail};
use clap::Parser;
use cors_proxy_common::{ProxyRequest, ProxyResponse, decode_body};
use cors_proxy_handler::handlers::handle_proxy;
use cors_proxy_handler::{ReqwestFetcher, parse_event};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// CLI arguments for local invocation
#[derive(Parser, Debug)]
#[command(name = "cpx")]
#[command(about = "Run one event through the CORS proxy handler locally", long_about = None)]
#[command(version)]
struct Args {
    /// Event JSON, e.g. '{"httpMethod":"GET","queryStringParameters":{"url":"https://example.com/game.hex"}}'
    #[arg(short, long, conflicts_with = "path")]
    data: Option<String>,

    /// Read the event JSON from a file
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Shortcut for a GET event with this target URL
    #[arg(short, long, env = "CPX_URL", conflicts_with_all = ["data", "path"])]
    url: Option<String>,

    /// Write the decoded response body to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Where the event comes from
#[derive(Debug, Clone, PartialEq, Eq)]
enum EventSource {
    Inline(String),
    File(PathBuf),
    Url(String),
}

impl EventSource {
    fn from_args(args: &Args) -> Result<Self> {
        match (&args.data, &args.path, &args.url) {
            (Some(data), _, _) => Ok(Self::Inline(data.clone())),
            (_, Some(path), _) => Ok(Self::File(path.clone())),
            (_, _, Some(url)) => Ok(Self::Url(url.clone())),
            _ => bail!("one of --data, --path or --url is required"),
        }
    }

    fn load(&self) -> Result<ProxyRequest> {
        let payload: Value = match self {
            Self::Inline(data) => serde_json::from_str(data).context("Invalid event JSON")?,
            Self::File(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("Invalid event JSON in {}", path.display()))?
            }
            Self::Url(url) => return Ok(ProxyRequest::new("GET", url)),
        };

        Ok(parse_event(payload)?)
    }
}

/// Write the decoded body of a proxied response
fn write_body(response: &ProxyResponse, output: &Path) -> Result<usize> {
    let bytes = if response.is_base64_encoded {
        decode_body(&response.body).context("Response body is not valid base64")?
    } else {
        response.body.clone().into_bytes()
    };

    std::fs::write(output, &bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(bytes.len())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let source = EventSource::from_args(&args)?;
    debug!("Event source: {:?}", source);

    let request = source.load()?;
    let fetcher = ReqwestFetcher::new().context("Failed to build HTTP client")?;

    let response = handle_proxy(&request, &fetcher).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    if let Some(output) = &args.output {
        let written = write_body(&response, output)?;
        info!("Wrote {} bytes to {}", written, output.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(data: Option<&str>, path: Option<&str>, url: Option<&str>) -> Args {
        Args {
            data: data.map(str::to_string),
            path: path.map(PathBuf::from),
            url: url.map(str::to_string),
            output: None,
            verbose: false,
        }
    }

    #[test]
    fn test_event_source_inline() {
        let source = EventSource::from_args(&args(Some("{}"), None, None)).unwrap();
        assert_eq!(source, EventSource::Inline("{}".to_string()));
    }

    #[test]
    fn test_event_source_required() {
        assert!(EventSource::from_args(&args(None, None, None)).is_err());
    }

    #[test]
    fn test_load_inline_event() {
        let source = EventSource::Inline(
            r#"{"httpMethod":"GET","queryStringParameters":{"url":"http://github.com/a.hex"}}"#
                .to_string(),
        );

        let request = source.load().unwrap();
        assert_eq!(request.method(), "GET");
        assert_eq!(request.target_url(), Some("http://github.com/a.hex"));
    }

    #[test]
    fn test_load_url_shortcut() {
        let source = EventSource::Url("https://example.com/game.arduboy".to_string());

        let request = source.load().unwrap();
        assert_eq!(request.method(), "GET");
        assert_eq!(request.target_url(), Some("https://example.com/game.arduboy"));
    }

    #[test]
    fn test_load_invalid_json() {
        let source = EventSource::Inline("not json".to_string());
        assert!(source.load().is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["cpx", "-u", "https://example.com/a.bin", "-v"]).unwrap();
        assert_eq!(args.url.as_deref(), Some("https://example.com/a.bin"));
        assert!(args.verbose);

        assert!(Args::try_parse_from(["cpx", "-d", "{}", "-p", "event.json"]).is_err());
    }

    #[test]
    fn test_write_body_decodes_base64() {
        let response = ProxyResponse::proxied(200, None, "AAEC//4=".to_string());
        let output = std::env::temp_dir().join(format!("cpx-test-{}.bin", std::process::id()));

        let written = write_body(&response, &output).unwrap();
        assert_eq!(written, 5);
        assert_eq!(std::fs::read(&output).unwrap(), vec![0x00, 0x01, 0x02, 0xFF, 0xFE]);

        std::fs::remove_file(&output).unwrap();
    }
}
