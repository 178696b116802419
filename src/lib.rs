//! # Mintage
//!
//! A capability-gated fungible-asset ledger core. Each asset kind has a
//! published descriptor (name, scaling factor, optional tracked supply),
//! per-account holding stores with append-only deposit/withdraw event
//! sinks, and an unforgeable mint/burn capability pair issued exactly
//! once, to the kind's canonical owner, at initialization.
//!
//! Quantities move as [`Value`]s — owned, non-duplicable carriers that
//! must be deposited, burned, merged, or explicitly destroyed. Letting
//! one fall on the floor is flagged at runtime, so every unit of every
//! kind is always in exactly one place.
//!
//! ```rust
//! use mintage::{AccountId, KindId, Ledger, Signer, adapters::MemoryRegistry};
//!
//! let issuer = AccountId::new();
//! let kind = KindId::new();
//! let mut registry = MemoryRegistry::new();
//! registry.assign(kind, issuer);
//!
//! let mut ledger = Ledger::new(Box::new(registry));
//! let signer = Signer::new(issuer);
//! let (mint, _burn) = ledger
//!     .initialize(&signer, kind, "GOLD", 100, true)
//!     .unwrap();
//!
//! ledger.register(issuer, kind).unwrap();
//! let coins = ledger.mint(50_00, &mint).unwrap();
//! ledger.deposit(issuer, coins).unwrap();
//! assert_eq!(ledger.balance(issuer, kind).unwrap(), 50_00);
//! ```
//!
//! The core is synchronous and does no locking of its own: the host
//! wraps each operation in its own atomic unit of work, and since every
//! operation here validates before it mutates, an `Err` always means
//! "nothing happened".

pub mod adapters;
pub mod asset;
pub mod capability;
pub mod error;
pub mod ledger;
pub mod store;
pub mod value;

pub use asset::{AccountId, AssetType, KindId};
pub use capability::{BurnCapability, MintCapability};
pub use error::LedgerError;
pub use ledger::Ledger;
pub use store::EventRecord;
pub use value::Value;

/// The identity/type-registry collaborator: resolves an asset kind to
/// the one address authorized to publish its descriptor. How ownership
/// is assigned is the host's business; this core only asks.
pub trait IdentityRegistry: Send + Sync {
    fn canonical_owner(&self, kind: KindId) -> Option<AccountId>;
}

/// An authenticated-identity token proving control of an account.
///
/// Constructed by the host's authentication layer and treated as opaque
/// here — this core never verifies one, it only reads the account out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signer {
    account: AccountId,
}

impl Signer {
    pub fn new(account: AccountId) -> Self {
        Self { account }
    }

    pub fn account(&self) -> AccountId {
        self.account
    }
}
