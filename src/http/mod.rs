//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, layers)
//!     → request.rs (request ID)
//!     → middleware/cors.rs (permissive policy only)
//!     → relay.rs (upstream fetch, pass-through)
//!     → response.rs (body and header shaping)
//!     → Send to client
//! ```

pub mod middleware;
pub mod relay;
pub mod request;
pub mod response;
pub mod server;

pub use relay::{relay_handler, RelayState};
pub use request::{MakeRelayRequestId, RequestIdExt, X_REQUEST_ID};
pub use server::{build_router, HttpServer};
