// src/capability.rs
use crate::KindId;

/// Authorization to mint values of one asset kind.
///
/// Constructible only by `Ledger::initialize`; there is deliberately no
/// public constructor and no serde impl, so a capability can only exist
/// if the kind's canonical owner published the kind. Copy and store it
/// freely — presenting it by reference is what authorizes a mint. There
/// is no revocation: a capability is valid for the lifetime of the
/// ledger.
#[derive(Debug, Clone, Copy)]
pub struct MintCapability {
    kind: KindId,
}

impl MintCapability {
    pub(crate) fn new(kind: KindId) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> KindId {
        self.kind
    }
}

/// Authorization to burn values of one asset kind. Same construction
/// and lifetime rules as [`MintCapability`].
#[derive(Debug, Clone, Copy)]
pub struct BurnCapability {
    kind: KindId,
}

impl BurnCapability {
    pub(crate) fn new(kind: KindId) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> KindId {
        self.kind
    }
}
