//! One-time network discovery: chain identity → parameters → network mode.

use serde::Serialize;

use chainstatus_core::provider::{FeeSupport, StatusProvider};
use chainstatus_core::{ChainInfo, StatusError};

use crate::codec::PivxCodec;
use crate::params::{select_params, ChainParams, MAINNET_MAGIC};

/// Fee-estimation support of PIVX backends: legacy `estimatefee` only.
pub const PIVX_FEES: FeeSupport = FeeSupport {
    estimate_fee: true,
    estimate_smart_fee: false,
};

/// Main network vs. test network, with the label downstream formatters use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NetworkMode {
    pub testnet: bool,
    pub label: &'static str,
}

impl NetworkMode {
    pub const fn livenet() -> Self {
        Self {
            testnet: false,
            label: "livenet",
        }
    }

    pub const fn testnet() -> Self {
        Self {
            testnet: true,
            label: "testnet",
        }
    }

    /// Livenet iff `params` carry the mainnet magic.
    pub fn for_params(params: &ChainParams) -> Self {
        if params.net == MAINNET_MAGIC {
            Self::livenet()
        } else {
            Self::testnet()
        }
    }
}

/// Everything decided at startup. Immutable; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct NetworkContext {
    pub params: &'static ChainParams,
    pub mode: NetworkMode,
    pub fees: FeeSupport,
    pub codec: PivxCodec,
}

impl NetworkContext {
    pub fn new(params: &'static ChainParams) -> Self {
        Self {
            params,
            mode: NetworkMode::for_params(params),
            fees: PIVX_FEES,
            codec: PivxCodec::new(params),
        }
    }
}

/// Discover the node's network and build the [`NetworkContext`].
///
/// Any failure is wrapped in [`StatusError::Initialization`]; callers must
/// not serve status requests without a context.
pub async fn initialize<B>(base: &B) -> Result<NetworkContext, StatusError>
where
    B: StatusProvider<Status = ChainInfo> + ?Sized,
{
    initialize_with(base, select_params).await
}

/// As [`initialize`], with a custom chain-identity selector.
pub async fn initialize_with<B>(
    base: &B,
    select: fn(&str) -> &'static ChainParams,
) -> Result<NetworkContext, StatusError>
where
    B: StatusProvider<Status = ChainInfo> + ?Sized,
{
    let info = base
        .chain_status()
        .await
        .map_err(|e| StatusError::Initialization(Box::new(e)))?;

    tracing::info!(chain = %info.chain, "chain name");
    let ctx = NetworkContext::new(select(&info.chain));

    tracing::info!(
        name = ctx.params.name,
        network = ctx.mode.label,
        coin = %base.chain_config().coin_name,
        "rpc: block chain"
    );
    Ok(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{MAINNET_PARAMS, REGTEST_PARAMS, TESTNET_PARAMS};

    #[test]
    fn mode_follows_magic() {
        assert_eq!(NetworkMode::for_params(&MAINNET_PARAMS), NetworkMode::livenet());
        assert_eq!(NetworkMode::for_params(&TESTNET_PARAMS), NetworkMode::testnet());
        assert_eq!(NetworkMode::for_params(&REGTEST_PARAMS), NetworkMode::testnet());
    }

    #[test]
    fn any_non_mainnet_magic_is_testnet() {
        static ODD: ChainParams = ChainParams {
            net: 0xdead_beef,
            name: "odd",
            pubkey_hash_addr_id: 0,
            script_hash_addr_id: 5,
        };
        let mode = NetworkMode::for_params(&ODD);
        assert!(mode.testnet);
        assert_eq!(mode.label, "testnet");
    }

    #[test]
    fn context_fees_are_fixed() {
        for params in [&MAINNET_PARAMS, &TESTNET_PARAMS, &REGTEST_PARAMS] {
            let ctx = NetworkContext::new(params);
            assert!(ctx.fees.estimate_fee);
            assert!(!ctx.fees.estimate_smart_fee);
            assert_eq!(ctx.codec.params(), params);
        }
    }
}
