// src/adapters/memory.rs
use crate::{AccountId, IdentityRegistry, KindId};
use std::collections::HashMap;

/// In-memory identity registry: a plain map from asset kind to its
/// canonical owning address. Suited to tests and embeddings where the
/// host assigns kind ownership up front.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    owners: HashMap<KindId, AccountId>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self {
            owners: HashMap::new(),
        }
    }

    /// Declare `owner` as the canonical owning address for `kind`.
    /// Reassignment overwrites — ownership policy is the host's call.
    pub fn assign(&mut self, kind: KindId, owner: AccountId) {
        self.owners.insert(kind, owner);
    }
}

impl IdentityRegistry for MemoryRegistry {
    fn canonical_owner(&self, kind: KindId) -> Option<AccountId> {
        self.owners.get(&kind).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_assigned_kinds_only() {
        let kind = KindId::new();
        let owner = AccountId::new();

        let mut registry = MemoryRegistry::new();
        assert_eq!(registry.canonical_owner(kind), None);

        registry.assign(kind, owner);
        assert_eq!(registry.canonical_owner(kind), Some(owner));
        assert_eq!(registry.canonical_owner(KindId::new()), None);
    }
}
