mod encoding;
mod headers;

pub use encoding::{body_to_json, decode_body, encode_body};
pub use headers::{forward_headers, is_stripped_header};
