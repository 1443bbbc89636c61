//! chainstatus-pivx: PIVX adapter for ChainStatus.
//!
//! Wraps any bitcoind-style [`StatusProvider`](chainstatus_core::StatusProvider)
//! and adds money supply, zPIV supply, the enabled masternode count and the
//! next superblock height to every status request.
//!
//! # Quick start
//! ```rust,no_run
//! use chainstatus_core::StatusProvider;
//! use chainstatus_pivx::PivxRpc;
//!
//! # async fn run<B>(base: B) -> Result<(), chainstatus_core::StatusError>
//! # where B: StatusProvider<Status = chainstatus_core::ChainInfo> {
//! let pivx = PivxRpc::connect(base).await?;
//! println!("network: {}", pivx.network().mode.label);
//! let status = pivx.chain_status().await?;
//! println!("{} masternodes enabled", status.active_masternodes);
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod network;
pub mod params;
pub mod rpc;
pub mod status;
pub mod supply;

pub use codec::{AddressKind, CodecError, PivxCodec};
pub use network::{initialize, initialize_with, NetworkContext, NetworkMode, PIVX_FEES};
pub use params::{select_params, ChainParams, MAINNET_MAGIC};
pub use rpc::{EnrichmentMode, PivxRpc};
pub use status::{ChainStatus, MasternodeCount};
pub use supply::{Denomination, ShieldedSupply};
