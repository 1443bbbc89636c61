//! chainstatus-http: HTTP JSON-RPC transport for bitcoind-family nodes.

pub mod client;
pub mod config;

pub use client::{HttpClientConfig, HttpRpcClient};
pub use config::RpcConfig;
