//! PIVX network parameters and the chain-identity selector.

/// Network magic of PIVX mainnet.
pub const MAINNET_MAGIC: u32 = 0xe9fd_c490;
/// Network magic of PIVX testnet.
pub const TESTNET_MAGIC: u32 = 0xba65_7645;
/// Network magic of PIVX regtest.
pub const REGTEST_MAGIC: u32 = 0xa1cf_7eac;

/// Immutable per-network constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainParams {
    /// Network magic bytes (little-endian on the wire).
    pub net: u32,
    /// Display name; matches the `chain` string the node reports.
    pub name: &'static str,
    /// Base58 version byte of pay-to-pubkey-hash addresses.
    pub pubkey_hash_addr_id: u8,
    /// Base58 version byte of pay-to-script-hash addresses.
    pub script_hash_addr_id: u8,
}

pub static MAINNET_PARAMS: ChainParams = ChainParams {
    net: MAINNET_MAGIC,
    name: "main",
    pubkey_hash_addr_id: 30, // 'D'
    script_hash_addr_id: 13,
};

pub static TESTNET_PARAMS: ChainParams = ChainParams {
    net: TESTNET_MAGIC,
    name: "test",
    pubkey_hash_addr_id: 139,
    script_hash_addr_id: 19,
};

pub static REGTEST_PARAMS: ChainParams = ChainParams {
    net: REGTEST_MAGIC,
    name: "regtest",
    pubkey_hash_addr_id: 139,
    script_hash_addr_id: 19,
};

/// Map a node-reported chain identity to its parameters.
///
/// Unknown identities fall back to mainnet.
pub fn select_params(chain: &str) -> &'static ChainParams {
    match chain {
        "test" => &TESTNET_PARAMS,
        "regtest" => &REGTEST_PARAMS,
        _ => &MAINNET_PARAMS,
    }
}
