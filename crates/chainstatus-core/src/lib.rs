//! chainstatus-core: foundation traits and types for ChainStatus.
//!
//! # Overview
//!
//! ChainStatus fetches node and chain status from bitcoind-family full
//! nodes and lets chain adapters enrich it. The core crate defines:
//!
//! - [`RpcTransport`]: how one JSON-RPC request reaches a node
//! - [`JsonRpcRequest`] / [`JsonRpcResponse`]: wire types
//! - [`StatusProvider`]: the capability chain adapters decorate
//! - [`ChainInfo`] / [`Amount`]: the base status model
//! - [`TransportError`] / [`StatusError`]: error taxonomy
//! - [`policy`] module: retry backoff for transports

pub mod error;
pub mod policy;
pub mod provider;
pub mod request;
pub mod status;
pub mod transport;

pub use error::{StatusError, TransportError};
pub use provider::{call, ChainConfig, FeeSupport, StatusProvider};
pub use request::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, RpcId};
pub use status::{Amount, ChainInfo};
pub use transport::RpcTransport;
