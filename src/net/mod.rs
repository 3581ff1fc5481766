//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Configured address
//!     → listener.rs (parse, bind)
//!     → Hand off to HTTP layer
//! ```
//!
//! # Design Decisions
//! - A bind failure is fatal; there is no retry or supervision loop

pub mod listener;

pub use listener::{bind, ListenerError};
