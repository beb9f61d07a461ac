use crate::constants::{ALLOW_ORIGIN_ANY, NOSNIFF};
use serde::Serialize;

/// Response handed back to API Gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,

    /// Absent on validation rejections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<ProxyHeaders>,

    /// Base64 for proxied responses, plain text for rejections
    pub body: String,

    pub is_base64_encoded: bool,
}

/// The fixed header set of a proxied response
///
/// `Access-Control-Allow-Credentials` serializes as a JSON boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxyHeaders {
    #[serde(rename = "Access-Control-Allow-Origin")]
    pub allow_origin: String,

    #[serde(rename = "Access-Control-Allow-Credentials")]
    pub allow_credentials: bool,

    /// Copied from the origin; omitted when the origin sent none
    #[serde(rename = "content-type", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(rename = "x-content-type-options")]
    pub content_type_options: String,
}

impl ProxyHeaders {
    pub fn new(content_type: Option<String>) -> Self {
        Self {
            allow_origin: ALLOW_ORIGIN_ANY.to_string(),
            allow_credentials: true,
            content_type,
            content_type_options: NOSNIFF.to_string(),
        }
    }
}

impl ProxyResponse {
    /// A proxied response; `body` must already be base64
    pub fn proxied(status_code: u16, content_type: Option<String>, body: String) -> Self {
        Self {
            status_code,
            headers: Some(ProxyHeaders::new(content_type)),
            body,
            is_base64_encoded: true,
        }
    }

    /// A 400 rejection with a plain-text body
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status_code: 400,
            headers: None,
            body: message.into(),
            is_base64_encoded: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_proxied_response_serialization() {
        let res = ProxyResponse::proxied(
            200,
            Some("application/octet-stream".to_string()),
            "AAEC//4=".to_string(),
        );

        let value = serde_json::to_value(&res).unwrap();
        assert_eq!(
            value,
            json!({
                "statusCode": 200,
                "headers": {
                    "Access-Control-Allow-Origin": "*",
                    "Access-Control-Allow-Credentials": true,
                    "content-type": "application/octet-stream",
                    "x-content-type-options": "nosniff"
                },
                "body": "AAEC//4=",
                "isBase64Encoded": true
            })
        );
    }

    #[test]
    fn test_missing_content_type_is_omitted() {
        let res = ProxyResponse::proxied(204, None, String::new());

        let value = serde_json::to_value(&res).unwrap();
        let headers = value["headers"].as_object().unwrap();
        assert!(!headers.contains_key("content-type"));
        assert_eq!(headers["x-content-type-options"], "nosniff");
    }

    #[test]
    fn test_bad_request_shape() {
        let res = ProxyResponse::bad_request("nope");

        assert_eq!(res.status_code, 400);

        let value = serde_json::to_value(&res).unwrap();
        assert_eq!(
            value,
            json!({"statusCode": 400, "body": "nope", "isBase64Encoded": false})
        );
    }
}
