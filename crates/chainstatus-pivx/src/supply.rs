//! Zerocoin (zPIV) supply broken down by denomination.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use chainstatus_core::Amount;

/// The fixed set of zPIV denominations, plus the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Denomination {
    One,
    Five,
    Ten,
    Fifty,
    OneHundred,
    FiveHundred,
    OneThousand,
    FiveThousand,
    Total,
}

impl Denomination {
    pub const ALL: [Denomination; 9] = [
        Self::One,
        Self::Five,
        Self::Ten,
        Self::Fifty,
        Self::OneHundred,
        Self::FiveHundred,
        Self::OneThousand,
        Self::FiveThousand,
        Self::Total,
    ];

    /// The key the node uses in `zPIVsupply`.
    pub fn key(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Five => "5",
            Self::Ten => "10",
            Self::Fifty => "50",
            Self::OneHundred => "100",
            Self::FiveHundred => "500",
            Self::OneThousand => "1000",
            Self::FiveThousand => "5000",
            Self::Total => "total",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for Denomination {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Supply per denomination, iterated smallest first with the total last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShieldedSupply(BTreeMap<Denomination, Amount>);

impl ShieldedSupply {
    pub fn get(&self, denom: Denomination) -> Option<&Amount> {
        self.0.get(&denom)
    }

    pub fn total(&self) -> Option<&Amount> {
        self.get(Denomination::Total)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Denomination, &Amount)> {
        self.0.iter().map(|(d, a)| (*d, a))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Denomination, Amount)> for ShieldedSupply {
    fn from_iter<I: IntoIterator<Item = (Denomination, Amount)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for ShieldedSupply {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // `null` reads as an empty supply, same as an absent key.
        let raw = Option::<BTreeMap<String, Amount>>::deserialize(deserializer)?;
        let mut supply = BTreeMap::new();
        for (key, amount) in raw.unwrap_or_default() {
            match Denomination::from_key(&key) {
                Some(denom) => {
                    supply.insert(denom, amount);
                }
                None => tracing::debug!(key = %key, "ignoring unknown zPIV denomination"),
            }
        }
        Ok(Self(supply))
    }
}
