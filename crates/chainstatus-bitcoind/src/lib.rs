//! chainstatus-bitcoind: status provider for bitcoind-family full nodes.
//!
//! [`BitcoindRpc`] builds the base [`ChainInfo`](chainstatus_core::ChainInfo)
//! from `getblockchaininfo` and `getnetworkinfo`, and exposes the generic
//! named-call primitive chain adapters build on.
//!
//! # Quick start
//! ```rust,no_run
//! use std::sync::Arc;
//! use chainstatus_bitcoind::BitcoindRpc;
//! use chainstatus_core::StatusProvider;
//! use chainstatus_http::{HttpRpcClient, RpcConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = RpcConfig::for_url("http://127.0.0.1:8332");
//! let rpc = BitcoindRpc::new(Arc::new(HttpRpcClient::from_config(&cfg)?), "Bitcoin");
//! let info = rpc.chain_status().await?;
//! println!("{} at height {}", info.chain, info.blocks);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::{BitcoindRpc, DEFAULT_FEES};
