//! Spotify gateway - typed access to a Spotify catalog proxy
//!
//! The proxy server owns authentication and talks to the Spotify Web API.
//! This library builds the proxy paths, issues one GET per operation and
//! maps the JSON answers into typed records.

/// Client modules for talking to the proxy server
pub mod clients;
/// Proxy address and HTTP client configuration
pub mod config;
