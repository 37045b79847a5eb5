/// Proxy routes and search categories
pub mod endpoints;
/// Records mapped from proxy responses
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Request gateway for the proxy server
pub mod proxy;

pub use endpoints::Category;
pub use proxy::ProxyClient;
