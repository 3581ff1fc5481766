//! Upstream feed subsystem.
//!
//! # Data Flow
//! ```text
//! relay handler
//!     → fetcher.rs (one GET to the fixed feed URL)
//!     → status gate (> 299 is a failure, body discarded)
//!     → whole body buffered as Bytes
//!     → back to the handler, or a FetchError
//! ```
//!
//! # Design Decisions
//! - The fetcher is a trait object so handlers never construct clients
//! - No retries, no timeout override; transport defaults apply
//! - Error kinds are kept for logging but callers treat them alike

pub mod fetcher;
pub mod types;

pub use fetcher::{HttpFetcher, UpstreamFetcher};
pub use types::{FetchError, FetchResult};
