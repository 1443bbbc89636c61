//! The `StatusProvider` capability: the seam chain adapters decorate.
//!
//! A generic full-node client implements it directly. A chain-specific
//! adapter implements it again by holding a base provider as a named field,
//! calling through to it, and adding its own calls on top.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StatusError;

/// Which fee-estimation RPCs the backend understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSupport {
    /// Legacy `estimatefee`.
    pub estimate_fee: bool,
    /// `estimatesmartfee`.
    pub estimate_smart_fee: bool,
}

/// Static per-backend configuration exposed to downstream collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    pub coin_name: String,
    pub fees: FeeSupport,
}

/// Fetches node status and issues arbitrary named calls.
#[async_trait]
pub trait StatusProvider: Send + Sync {
    /// The status snapshot this provider produces.
    type Status: Send;

    /// Fetch the current status snapshot.
    async fn chain_status(&self) -> Result<Self::Status, StatusError>;

    /// Call a named remote method and return its raw `result`.
    ///
    /// A transport failure maps to [`StatusError::Transport`]; an error
    /// object in the response maps to [`StatusError::Rpc`].
    async fn call_value(&self, method: &str, params: Vec<Value>) -> Result<Value, StatusError>;

    /// Backend configuration (coin name, fee-estimation support).
    fn chain_config(&self) -> &ChainConfig;
}

/// Call `method` on `provider` and decode its result into `T`.
pub async fn call<P, T>(provider: &P, method: &str, params: Vec<Value>) -> Result<T, StatusError>
where
    P: StatusProvider + ?Sized,
    T: DeserializeOwned,
{
    let value = provider.call_value(method, params).await?;
    serde_json::from_value(value).map_err(|source| StatusError::Decode {
        method: method.to_string(),
        source,
    })
}
