//! `PivxRpc`: enriches the base status with PIVX-specific fields.
//!
//! The adapter holds the base provider as a named field. A status request
//! first fetches the base snapshot, then issues three extra calls:
//!
//! ```text
//! base.chain_status() → getinfo → getmasternodecount → getnextsuperblock
//! ```
//!
//! Any failure aborts the whole request; the first error by call order is
//! returned, whichever [`EnrichmentMode`] is used.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use chainstatus_core::provider::{call, ChainConfig, StatusProvider};
use chainstatus_core::{Amount, ChainInfo, StatusError};

use crate::network::{initialize, NetworkContext};
use crate::status::{ChainStatus, GetInfo, MasternodeCount};
use crate::supply::ShieldedSupply;

/// How the three enrichment calls are issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrichmentMode {
    /// One after another, stopping at the first failure.
    #[default]
    Sequential,
    /// All at once; results are still inspected in call order.
    Concurrent,
}

struct Enrichment {
    money_supply: Amount,
    shielded_supply: ShieldedSupply,
    active_masternodes: u32,
    next_superblock: u32,
}

/// PIVX status provider decorating a generic base provider.
pub struct PivxRpc<B> {
    base: B,
    network: Arc<NetworkContext>,
    config: ChainConfig,
    enrichment: EnrichmentMode,
}

impl<B> PivxRpc<B>
where
    B: StatusProvider<Status = ChainInfo>,
{
    /// Wrap `base` using an already-discovered network.
    pub fn new(base: B, network: Arc<NetworkContext>) -> Self {
        let config = ChainConfig {
            coin_name: base.chain_config().coin_name.clone(),
            fees: network.fees,
        };
        Self {
            base,
            network,
            config,
            enrichment: EnrichmentMode::default(),
        }
    }

    /// Discover the node's network, then wrap `base`.
    pub async fn connect(base: B) -> Result<Self, StatusError> {
        let network = initialize(&base).await?;
        Ok(Self::new(base, Arc::new(network)))
    }

    pub fn with_enrichment(mut self, mode: EnrichmentMode) -> Self {
        self.enrichment = mode;
        self
    }

    pub fn network(&self) -> &Arc<NetworkContext> {
        &self.network
    }

    pub fn base(&self) -> &B {
        &self.base
    }

    /// [`chain_status`](StatusProvider::chain_status) bounded by `deadline`.
    ///
    /// On expiry every in-flight call is dropped and
    /// [`StatusError::Timeout`] is returned.
    pub async fn chain_status_within(&self, deadline: Duration) -> Result<ChainStatus, StatusError> {
        tokio::time::timeout(deadline, self.chain_status())
            .await
            .map_err(|_| StatusError::Timeout {
                ms: deadline.as_millis() as u64,
            })?
    }

    async fn get_info(&self) -> Result<GetInfo, StatusError> {
        tracing::debug!("rpc: getinfo");
        call(&self.base, "getinfo", vec![]).await
    }

    async fn masternode_count(&self) -> Result<MasternodeCount, StatusError> {
        tracing::debug!("rpc: getmasternodecount");
        call(&self.base, "getmasternodecount", vec![]).await
    }

    async fn next_superblock(&self) -> Result<u32, StatusError> {
        tracing::debug!("rpc: getnextsuperblock");
        call(&self.base, "getnextsuperblock", vec![]).await
    }

    async fn enrich(&self) -> Result<Enrichment, StatusError> {
        let (info, count, next) = match self.enrichment {
            EnrichmentMode::Sequential => {
                let info = self.get_info().await?;
                let count = self.masternode_count().await?;
                let next = self.next_superblock().await?;
                (info, count, next)
            }
            EnrichmentMode::Concurrent => {
                let (info, count, next) = futures::join!(
                    self.get_info(),
                    self.masternode_count(),
                    self.next_superblock()
                );
                // `?` in call order keeps the surfaced error deterministic
                (info?, count?, next?)
            }
        };

        Ok(Enrichment {
            money_supply: info.money_supply,
            shielded_supply: info.zpiv_supply,
            active_masternodes: count.enabled,
            next_superblock: next,
        })
    }
}

#[async_trait]
impl<B> StatusProvider for PivxRpc<B>
where
    B: StatusProvider<Status = ChainInfo>,
{
    type Status = ChainStatus;

    async fn chain_status(&self) -> Result<ChainStatus, StatusError> {
        let info = self.base.chain_status().await?;
        let extra = self.enrich().await.map_err(|e| {
            tracing::warn!(error = %e, height = info.blocks, "status enrichment failed");
            e
        })?;

        Ok(ChainStatus {
            info,
            money_supply: extra.money_supply,
            shielded_supply: extra.shielded_supply,
            active_masternodes: extra.active_masternodes,
            next_superblock: extra.next_superblock,
        })
    }

    async fn call_value(&self, method: &str, params: Vec<Value>) -> Result<Value, StatusError> {
        self.base.call_value(method, params).await
    }

    fn chain_config(&self) -> &ChainConfig {
        &self.config
    }
}
