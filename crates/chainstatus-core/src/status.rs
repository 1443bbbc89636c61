//! Chain-agnostic status types.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// An exact decimal as reported by the node.
///
/// Keeps the node's digits verbatim: the value never passes through `f64`,
/// so supplies with more than 15 significant digits survive unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Amount(Number);

impl From<u64> for Amount {
    fn from(n: u64) -> Self {
        Self(Number::from(n))
    }
}

impl FromStr for Amount {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<Number>().map(Self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Accepts a JSON number or a numeric string (some forks quote amounts).
impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => Ok(Self(n)),
            Value::String(s) => s
                .parse()
                .map_err(|_| de::Error::custom(format!("invalid decimal amount: {s:?}"))),
            other => Err(de::Error::custom(format!(
                "expected a decimal amount, got {other}"
            ))),
        }
    }
}

/// The base, chain-agnostic snapshot of node and chain state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainInfo {
    /// Chain identity as reported by the node ("main", "test", "regtest").
    pub chain: String,
    pub blocks: u32,
    pub headers: u32,
    pub bestblockhash: String,
    pub difficulty: Amount,
    pub size_on_disk: u64,
    pub version: u32,
    pub subversion: String,
    pub protocolversion: u32,
    pub timeoffset: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub warnings: String,
}
