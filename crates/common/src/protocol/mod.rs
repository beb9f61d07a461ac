mod request;
mod response;

pub use request::ProxyRequest;
pub use response::{ProxyHeaders, ProxyResponse};
