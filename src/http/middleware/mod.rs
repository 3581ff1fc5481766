//! Middleware wrapped around the relay route.

pub mod cors;

pub use cors::cors_middleware;
