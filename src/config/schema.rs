//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from the config file and
//! carry defaults so partial configs work.

use serde::{Deserialize, Serialize};

use crate::airdrop::types::Network;

/// Root configuration for the airdrop client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FaucetConfig {
    /// RPC endpoint settings.
    pub rpc: RpcConfig,

    /// Rate limiting configuration.
    pub rate_limit: RateLimitConfig,

    /// Confirmation polling settings.
    pub confirmation: ConfirmationConfig,

    /// Request log persistence.
    pub store: StoreConfig,
}

/// RPC endpoints and request timeout.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RpcConfig {
    /// Devnet RPC endpoint.
    pub devnet_url: String,

    /// Testnet RPC endpoint.
    pub testnet_url: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            devnet_url: "https://api.devnet.solana.com".to_string(),
            testnet_url: "https://api.testnet.solana.com".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl RpcConfig {
    /// Endpoint configured for the given network.
    pub fn url_for(&self, network: Network) -> &str {
        match network {
            Network::Devnet => &self.devnet_url,
            Network::Testnet => &self.testnet_url,
        }
    }
}

/// Fixed-window rate limit parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Maximum airdrop requests per window.
    pub max_requests: usize,

    /// Window length in milliseconds.
    pub window_ms: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 2,
            window_ms: 60 * 60 * 1000,
        }
    }
}

/// Confirmation polling parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConfirmationConfig {
    /// Interval between status polls in milliseconds.
    pub poll_interval_ms: u64,

    /// Deadline for the whole confirmation wait in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ConfirmationConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 2_000,
            timeout_ms: 60_000,
        }
    }
}

/// Request log persistence settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the JSON request log file.
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: "airdrop_requests.json".to_string(),
        }
    }
}
