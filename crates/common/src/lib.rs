//! Common types and utilities for the CORS proxy
//!
//! This crate provides the inbound/outbound wire shapes, target validation,
//! header filtering and body encoding used by the Lambda handler and the local
//! invocation tool. It performs no I/O.

pub mod constants;
pub mod error;
pub mod protocol;
pub mod utils;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::{BoxError, ProxyError, Result};
pub use protocol::{ProxyHeaders, ProxyRequest, ProxyResponse};
pub use utils::{body_to_json, decode_body, encode_body, forward_headers, is_stripped_header};
pub use validation::{ValidationError, validate_target_url};
