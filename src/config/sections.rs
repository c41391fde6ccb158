use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::remote::FaultInjector;

/// Where articles come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Try the backend before the local catalog (default: false)
    pub use_remote: bool,

    /// Backend base URL, including the API prefix
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,

    /// Use the in-process fake backend instead of HTTP (default: false)
    pub use_fake: bool,

    pub fake_delay_min_ms: u64,
    pub fake_delay_max_ms: u64,

    /// Chance of a simulated failure per fake request (default: 0.05)
    pub fake_error_rate: f64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            use_remote: false,
            base_url: "http://127.0.0.1:8080/api/v1/".to_string(),
            timeout_secs: 10,
            use_fake: false,
            fake_delay_min_ms: 100,
            fake_delay_max_ms: 800,
            fake_error_rate: 0.05,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Every fake request is delayed; some fail.
    pub fn fake_faults(&self) -> FaultInjector {
        FaultInjector::new(
            1.0,
            self.fake_delay_min_ms,
            self.fake_delay_max_ms,
            self.fake_error_rate,
        )
    }
}

/// The local fake API server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,

    /// Listen port, 1024-65535 (default: 8080)
    pub port: u16,

    /// Chance that a request is delayed (default: 0.1)
    pub delay_probability: f64,
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,

    /// Chance of an injected 500 per request (default: 0.05)
    pub error_rate: f64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            delay_probability: 0.1,
            delay_min_ms: 100,
            delay_max_ms: 500,
            error_rate: 0.05,
        }
    }
}

impl ServerConfig {
    pub fn faults(&self) -> FaultInjector {
        FaultInjector::new(
            self.delay_probability,
            self.delay_min_ms,
            self.delay_max_ms,
            self.error_rate,
        )
    }
}

/// Paging of article lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Articles per page in list output (default: 10)
    pub page_size: usize,

    /// Page size requested from the backend per category (default: 20)
    pub category_fetch_limit: u32,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            category_fetch_limit: 20,
        }
    }
}
