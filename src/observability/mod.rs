//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Relay handler and middleware produce:
//!     → logging.rs (structured log events, request IDs via TraceLayer)
//!     → metrics.rs (request outcomes, fetch latency)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Prometheus scrape endpoint (optional)
//! ```

pub mod logging;
pub mod metrics;
