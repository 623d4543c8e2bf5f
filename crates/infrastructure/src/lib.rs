//! DNS Console Infrastructure Layer
pub mod http;

pub use http::HttpBackendClient;
