//! Gateway configuration.

use std::path::Path;

use anyhow::Context;
use medledger_contracts::ContractConfig;
use serde::Deserialize;

/// Query cache settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Wrap connections in a `CachedConnection`.
    pub enabled: bool,

    /// Cached results per chaincode scope before the scope is cleared.
    /// Zero disables caching even when `enabled` is set.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_entries: 1024,
        }
    }
}

/// Configuration for a client gateway.
///
/// Identifies the calling user and the channel, and sets the options the
/// registered chaincodes and the query cache run with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Identity the gateway submits as.
    pub user_name: String,

    /// Channel every call is addressed to.
    pub channel_name: String,

    /// Membership service provider of `user_name`.
    pub msp_id: String,

    /// Options for the built-in chaincodes.
    pub contract: ContractConfig,

    pub cache: CacheConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            user_name: "User1".into(),
            channel_name: "mychannel".into(),
            msp_id: "Org1MSP".into(),
            contract: ContractConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Parse a config from JSON text. Missing fields take their defaults.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("invalid gateway config")
    }

    /// Load a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read gateway config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }
}
