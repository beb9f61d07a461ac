//! Handler modules
//!
//! The proxy has a single entry point shared by the Lambda binary and the local
//! invocation tool.

pub mod proxy;


pub use proxy::handle_proxy;
