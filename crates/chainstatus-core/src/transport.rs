//! The `RpcTransport` trait: how a request reaches the node.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::request::{JsonRpcRequest, JsonRpcResponse};

/// Moves one JSON-RPC request to a node and returns its response.
///
/// Application errors (a response carrying an `error` object) are returned
/// as `Ok`; only failures to complete the exchange are `Err`.
///
/// Implementations must be `Send + Sync` and can be stored as
/// `Arc<dyn RpcTransport>`.
#[async_trait]
pub trait RpcTransport: Send + Sync + 'static {
    async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, TransportError>;

    /// Return the transport's identifier (URL or name).
    fn url(&self) -> &str;
}
