//! Backend connection settings, as found in a coin's JSON config file.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use chainstatus_core::policy::RetryConfig;

/// Connection settings for a bitcoind-family backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcConfig {
    pub rpc_url: String,
    #[serde(default)]
    pub rpc_user: String,
    #[serde(default)]
    pub rpc_pass: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub rpc_timeout: u64,
    #[serde(default = "default_coin_name")]
    pub coin_name: String,
    #[serde(default)]
    pub retry: RetryConfig,
}

fn default_timeout() -> u64 {
    25
}

fn default_coin_name() -> String {
    "PIVX".into()
}

impl RpcConfig {
    /// Settings for `url` with every other field at its default.
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            rpc_url: url.into(),
            rpc_user: String::new(),
            rpc_pass: String::new(),
            rpc_timeout: default_timeout(),
            coin_name: default_coin_name(),
            retry: RetryConfig::default(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.rpc_timeout)
    }

    /// Basic-auth credentials, if a user is configured.
    pub fn credentials(&self) -> Option<(String, String)> {
        if self.rpc_user.is_empty() {
            None
        } else {
            Some((self.rpc_user.clone(), self.rpc_pass.clone()))
        }
    }
}
