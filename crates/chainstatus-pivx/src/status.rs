//! The composite PIVX status and the wire shapes it is built from.

use serde::{Deserialize, Serialize};

use chainstatus_core::{Amount, ChainInfo};

use crate::supply::ShieldedSupply;

/// Base chain status enriched with PIVX-specific fields.
///
/// Only ever built once every enrichment call has succeeded, so no field is
/// optional.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainStatus {
    #[serde(flatten)]
    pub info: ChainInfo,
    pub money_supply: Amount,
    pub shielded_supply: ShieldedSupply,
    /// Enabled masternodes.
    pub active_masternodes: u32,
    /// Height of the next budget superblock.
    pub next_superblock: u32,
}

/// `getinfo` result (fields this crate reads).
#[derive(Debug, Clone, Deserialize)]
pub struct GetInfo {
    #[serde(rename = "moneysupply")]
    pub money_supply: Amount,
    /// Absent on nodes built without zerocoin.
    #[serde(rename = "zPIVsupply", default)]
    pub zpiv_supply: ShieldedSupply,
}

/// `getmasternodecount` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MasternodeCount {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub stable: u32,
    pub enabled: u32,
    #[serde(default)]
    pub inqueue: u32,
}
