//! Base58Check address codec bound to the selected network.

use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::params::ChainParams;

const CHECKSUM_LEN: usize = 4;
const PAYLOAD_LEN: usize = 1 + 20;

/// Which script template an address pays to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    PubKeyHash,
    ScriptHash,
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid base58: {0}")]
    Base58(#[from] bs58::decode::Error),

    #[error("address checksum mismatch")]
    Checksum,

    #[error("decoded address is {0} bytes, expected 25")]
    Length(usize),

    #[error("version byte {version} is not a {network} address")]
    WrongNetwork { version: u8, network: &'static str },
}

/// Encodes and decodes addresses for one PIVX network.
#[derive(Debug, Clone)]
pub struct PivxCodec {
    params: &'static ChainParams,
}

impl PivxCodec {
    pub fn new(params: &'static ChainParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &'static ChainParams {
        self.params
    }

    pub fn version_byte(&self, kind: AddressKind) -> u8 {
        match kind {
            AddressKind::PubKeyHash => self.params.pubkey_hash_addr_id,
            AddressKind::ScriptHash => self.params.script_hash_addr_id,
        }
    }

    /// Base58Check-encode a 20-byte hash as an address of this network.
    pub fn encode_address(&self, kind: AddressKind, hash: &[u8; 20]) -> String {
        let mut data = Vec::with_capacity(PAYLOAD_LEN + CHECKSUM_LEN);
        data.push(self.version_byte(kind));
        data.extend_from_slice(hash);
        let check = checksum(&data);
        data.extend_from_slice(&check);
        bs58::encode(data).into_string()
    }

    /// Decode an address, checking checksum, length and network.
    pub fn decode_address(&self, address: &str) -> Result<(AddressKind, [u8; 20]), CodecError> {
        let bytes = bs58::decode(address).into_vec()?;
        if bytes.len() != PAYLOAD_LEN + CHECKSUM_LEN {
            return Err(CodecError::Length(bytes.len()));
        }
        let (payload, check) = bytes.split_at(PAYLOAD_LEN);
        if checksum(payload).as_slice() != check {
            return Err(CodecError::Checksum);
        }

        let version = payload[0];
        let kind = if version == self.params.pubkey_hash_addr_id {
            AddressKind::PubKeyHash
        } else if version == self.params.script_hash_addr_id {
            AddressKind::ScriptHash
        } else {
            return Err(CodecError::WrongNetwork {
                version,
                network: self.params.name,
            });
        };

        let mut hash = [0u8; 20];
        hash.copy_from_slice(&payload[1..]);
        Ok((kind, hash))
    }
}

fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = Sha256::digest(Sha256::digest(data));
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}
