use crate::constants::URL_PARAM;
use serde::Deserialize;
use std::collections::HashMap;

/// Inbound API Gateway proxy event, reduced to the fields the proxy reads
///
/// Accepts both payload format 1.0 (`httpMethod` at the top level) and 2.0
/// (`requestContext.http.method`). Null and missing maps are treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    /// Query string parameters; `url` carries the proxy target
    #[serde(default, deserialize_with = "nullable_map")]
    pub query_string_parameters: HashMap<String, String>,

    /// Request headers, keys in whatever case the client sent
    #[serde(default, deserialize_with = "nullable_map")]
    pub headers: HashMap<String, String>,

    /// HTTP method (payload format 1.0)
    #[serde(default)]
    pub http_method: Option<String>,

    /// Request body as delivered by API Gateway
    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub request_context: Option<RequestContext>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RequestContext {
    #[serde(default)]
    pub http: Option<HttpContext>,
}

/// Payload format 2.0 HTTP description
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HttpContext {
    #[serde(default)]
    pub method: Option<String>,
}

impl ProxyRequest {
    /// Create a request with the given method and target
    pub fn new(method: &str, url: &str) -> Self {
        Self {
            query_string_parameters: HashMap::from([(URL_PARAM.to_string(), url.to_string())]),
            http_method: Some(method.to_string()),
            ..Default::default()
        }
    }

    /// The `url` query parameter, if present
    pub fn target_url(&self) -> Option<&str> {
        self.query_string_parameters.get(URL_PARAM).map(String::as_str)
    }

    /// HTTP method from either payload format, GET when none is given
    pub fn method(&self) -> &str {
        self.http_method
            .as_deref()
            .or_else(|| {
                self.request_context
                    .as_ref()
                    .and_then(|ctx| ctx.http.as_ref())
                    .and_then(|http| http.method.as_deref())
            })
            .unwrap_or("GET")
    }

    /// Check if the request carries a non-empty body
    pub fn has_body(&self) -> bool {
        self.body.as_deref().is_some_and(|b| !b.is_empty())
    }
}

fn nullable_map<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<HashMap<String, String>>::deserialize(deserializer)?.unwrap_or_default())
}
