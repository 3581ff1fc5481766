//! Configuration schema definitions.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! relay's built-in behavior. All types derive Serde traits for
//! deserialization from TOML.

use serde::{Deserialize, Serialize};

/// Fixed upstream feed: CelesTrak general perturbations for the Starlink group.
pub const UPSTREAM_URL: &str =
    "https://celestrak.com/NORAD/elements/gp.php?GROUP=starlink&FORMAT=json";

/// Default listener address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";

/// The single route served by the relay.
pub const RELAY_PATH: &str = "/gp";

/// Root configuration for the relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Cross-origin policy applied to the relay route.
    pub cors: CorsConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,

    /// Upstream feed. Not readable from config files.
    #[serde(skip)]
    pub upstream: UpstreamConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

/// Which flavor of the relay handler is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CorsPolicy {
    /// Plain relay: GET only, no cross-origin headers.
    Disabled,
    /// Browser-friendly relay: preflight handling and permissive headers.
    #[default]
    Permissive,
}

impl std::str::FromStr for CorsPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "disabled" | "off" => Ok(CorsPolicy::Disabled),
            "permissive" | "on" => Ok(CorsPolicy::Permissive),
            other => Err(format!("unknown CORS policy '{}'", other)),
        }
    }
}

/// Cross-origin configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CorsConfig {
    pub policy: CorsPolicy,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output for development.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

/// Upstream feed location.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: UPSTREAM_URL.to_string(),
        }
    }
}
