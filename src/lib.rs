//! gp-relay library: an HTTP relay for the CelesTrak Starlink GP feed.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod upstream;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use upstream::{FetchError, HttpFetcher, UpstreamFetcher};
