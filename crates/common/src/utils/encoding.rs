use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::Serialize;

/// Encode bytes to Base64 string
pub fn encode_body(body: &[u8]) -> String {
    STANDARD.encode(body)
}

/// Decode Base64 string to bytes
pub fn decode_body(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(encoded)
}

/// JSON form of a raw byte buffer: `{"type":"Buffer","data":[...]}`
#[derive(Serialize)]
struct BufferJson<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    data: &'a [u8],
}

/// Serialize a captured response body the way it is echoed back when the
/// inbound request carried a body
pub fn body_to_json(body: &[u8]) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&BufferJson {
        kind: "Buffer",
        data: body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_empty() {
        let empty: &[u8] = &[];
        assert_eq!(encode_body(empty), "");
    }

    #[test]
    fn test_encode_simple_text() {
        assert_eq!(encode_body(b"Hello, World!"), "SGVsbG8sIFdvcmxkIQ==");
    }

    #[test]
    fn test_encode_binary_data() {
        let binary = vec![0x00, 0x01, 0x02, 0xFF, 0xFE];
        assert_eq!(encode_body(&binary), "AAEC//4=");
    }

    #[test]
    fn test_decode_binary_data() {
        let decoded = decode_body("AAEC//4=").unwrap();
        assert_eq!(decoded, vec![0x00, 0x01, 0x02, 0xFF, 0xFE]);
    }

    #[test]
    fn test_decode_invalid_base64() {
        assert!(decode_body("This is not valid base64!!!").is_err());
    }

    #[test]
    fn test_roundtrip_all_bytes() {
        let original: Vec<u8> = (0..=255).collect();
        let decoded = decode_body(&encode_body(&original)).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_body_to_json() {
        let json = body_to_json(&[0x3A, 0x31, 0xFF]).unwrap();
        assert_eq!(json, br#"{"type":"Buffer","data":[58,49,255]}"#);
    }

    #[test]
    fn test_body_to_json_empty() {
        let json = body_to_json(&[]).unwrap();
        assert_eq!(json, br#"{"type":"Buffer","data":[]}"#);
    }
}
