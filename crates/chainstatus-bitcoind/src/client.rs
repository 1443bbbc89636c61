//! `BitcoindRpc`: the generic base status provider.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use chainstatus_core::provider::{call, ChainConfig, FeeSupport, StatusProvider};
use chainstatus_core::request::JsonRpcRequest;
use chainstatus_core::status::ChainInfo;
use chainstatus_core::transport::RpcTransport;
use chainstatus_core::StatusError;

use crate::types::{BlockchainInfo, NetworkInfo};

/// Fee support a plain bitcoind backend advertises.
pub const DEFAULT_FEES: FeeSupport = FeeSupport {
    estimate_fee: false,
    estimate_smart_fee: true,
};

/// Chain-agnostic client for bitcoind-family nodes.
pub struct BitcoindRpc {
    transport: Arc<dyn RpcTransport>,
    next_id: AtomicU64,
    config: ChainConfig,
}

impl BitcoindRpc {
    pub fn new(transport: Arc<dyn RpcTransport>, coin_name: impl Into<String>) -> Self {
        Self {
            transport,
            next_id: AtomicU64::new(1),
            config: ChainConfig {
                coin_name: coin_name.into(),
                fees: DEFAULT_FEES,
            },
        }
    }
}

#[async_trait]
impl StatusProvider for BitcoindRpc {
    type Status = ChainInfo;

    async fn chain_status(&self) -> Result<ChainInfo, StatusError> {
        tracing::debug!(url = self.transport.url(), "rpc: getblockchaininfo");
        let bc: BlockchainInfo = call(self, "getblockchaininfo", vec![]).await?;

        tracing::debug!(url = self.transport.url(), "rpc: getnetworkinfo");
        let net: NetworkInfo = call(self, "getnetworkinfo", vec![]).await?;

        // network warnings are more current than the chain's
        let warnings = if net.warnings.is_empty() {
            bc.warnings
        } else {
            net.warnings
        };

        Ok(ChainInfo {
            chain: bc.chain,
            blocks: bc.blocks,
            headers: bc.headers,
            bestblockhash: bc.bestblockhash,
            difficulty: bc.difficulty,
            size_on_disk: bc.size_on_disk,
            version: net.version,
            subversion: net.subversion,
            protocolversion: net.protocolversion,
            timeoffset: net.timeoffset,
            warnings,
        })
    }

    async fn call_value(&self, method: &str, params: Vec<Value>) -> Result<Value, StatusError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let resp = self
            .transport
            .send(JsonRpcRequest::new(id, method, params))
            .await?;
        resp.into_result().map_err(|err| {
            tracing::debug!(method, code = err.code, message = %err.message, "rpc error");
            StatusError::Rpc(err)
        })
    }

    fn chain_config(&self) -> &ChainConfig {
        &self.config
    }
}
