//! Result shapes of the bitcoind calls the base client consumes.

use serde::Deserialize;

use chainstatus_core::Amount;

/// `getblockchaininfo` result (fields this crate reads).
#[derive(Debug, Clone, Deserialize)]
pub struct BlockchainInfo {
    pub chain: String,
    pub blocks: u32,
    pub headers: u32,
    pub bestblockhash: String,
    pub difficulty: Amount,
    /// Missing on older forks.
    #[serde(default)]
    pub size_on_disk: u64,
    #[serde(default)]
    pub warnings: String,
}

/// `getnetworkinfo` result (fields this crate reads).
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkInfo {
    pub version: u32,
    pub subversion: String,
    pub protocolversion: u32,
    #[serde(default)]
    pub timeoffset: i64,
    #[serde(default)]
    pub warnings: String,
}
