// src/asset.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of one fungible asset kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KindId(pub Uuid);

impl KindId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for KindId {
    fn default() -> Self {
        Self::new()
    }
}

/// Identity of an account that can hold stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub Uuid);

impl AccountId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-kind descriptor: display name, decimal scaling factor, and the
/// tracked circulating supply (`None` when the kind is untracked).
///
/// Published exactly once per kind by `Ledger::initialize` and never
/// deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetType {
    pub name: String,
    pub scaling_factor: u64,
    pub supply: Option<u64>,
}

impl AssetType {
    pub fn new(name: &str, scaling_factor: u64, monitor_supply: bool) -> Self {
        Self {
            name: name.to_string(),
            scaling_factor,
            supply: if monitor_supply { Some(0) } else { None },
        }
    }

    /// Display quantity for an internal amount (e.g. 2.5, not 250_000_000).
    pub fn to_display(&self, internal_amount: u64) -> f64 {
        internal_amount as f64 / self.scaling_factor as f64
    }

    pub fn to_internal(&self, display_amount: f64) -> u64 {
        (display_amount * self.scaling_factor as f64) as u64
    }
}
