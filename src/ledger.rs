// src/ledger.rs
use crate::store::{AccountStore, EventRecord};
use crate::{
    AccountId, AssetType, BurnCapability, IdentityRegistry, KindId, LedgerError, MintCapability,
    Signer, Value,
};
use metrics::{counter, histogram};
use std::collections::HashMap;

/// The fungible-asset accounting core: asset descriptors, per-(account,
/// kind) stores, and the operations over them.
///
/// Every operation is a synchronous state transition. Validation always
/// precedes mutation, so an `Err` return leaves descriptors, balances,
/// and event sinks exactly as they were — the host's unit of work can
/// treat any `Err` as a clean abort with no partial effect to undo.
pub struct Ledger {
    registry: Box<dyn IdentityRegistry>,
    assets: HashMap<KindId, AssetType>,
    stores: HashMap<(AccountId, KindId), AccountStore>,
}

impl Ledger {
    pub fn new(registry: Box<dyn IdentityRegistry>) -> Self {
        Self {
            registry,
            assets: HashMap::new(),
            stores: HashMap::new(),
        }
    }

    /// Publish the descriptor for `kind` and issue its capability pair.
    ///
    /// Only the canonical owner of the kind (per the identity registry)
    /// may publish, and only once — there is deliberately no way to call
    /// this twice successfully, and no way to reissue capabilities.
    pub fn initialize(
        &mut self,
        signer: &Signer,
        kind: KindId,
        name: &str,
        scaling_factor: u64,
        monitor_supply: bool,
    ) -> Result<(MintCapability, BurnCapability), LedgerError> {
        let canonical = self
            .registry
            .canonical_owner(kind)
            .ok_or(LedgerError::AddressMismatch)?;
        if canonical != signer.account() {
            return Err(LedgerError::AddressMismatch);
        }
        if self.assets.contains_key(&kind) {
            return Err(LedgerError::AlreadyPublished);
        }

        self.assets
            .insert(kind, AssetType::new(name, scaling_factor, monitor_supply));

        Ok((MintCapability::new(kind), BurnCapability::new(kind)))
    }

    /// Create an empty store for (account, kind). Nothing else in the
    /// surface auto-registers: deposit, withdraw, and transfer all
    /// require the store to already exist.
    pub fn register(&mut self, account: AccountId, kind: KindId) -> Result<(), LedgerError> {
        let key = (account, kind);
        if self.stores.contains_key(&key) {
            return Err(LedgerError::AlreadyPublished);
        }
        self.stores.insert(key, AccountStore::new(kind));
        Ok(())
    }

    /// Mint a fresh value of `amount`. The capability is borrowed, not
    /// consumed — it stays valid for any number of mints.
    pub fn mint(&mut self, amount: u64, cap: &MintCapability) -> Result<Value, LedgerError> {
        let kind = cap.kind();
        let asset = self.assets.get_mut(&kind).ok_or(LedgerError::NotPublished)?;

        if let Some(supply) = asset.supply {
            asset.supply = Some(supply.checked_add(amount).ok_or(LedgerError::Overflow)?);
        }

        histogram!("mintage.mint.amount", "asset" => asset.name.clone()).record(amount as f64);
        counter!("mintage.mint.total", "asset" => asset.name.clone()).increment(1);

        Ok(Value::new(kind, amount))
    }

    /// Destroy `value`, decrementing tracked supply. Consumes the value
    /// unconditionally; a zero amount is allowed.
    pub fn burn(&mut self, value: Value, cap: &BurnCapability) -> Result<(), LedgerError> {
        let kind = cap.kind();
        if value.kind() != kind {
            value.take();
            return Err(LedgerError::KindMismatch);
        }
        let Some(asset) = self.assets.get_mut(&kind) else {
            value.take();
            return Err(LedgerError::NotPublished);
        };

        let amount = value.take();
        if let Some(supply) = asset.supply {
            asset.supply = Some(supply.checked_sub(amount).ok_or(LedgerError::Underflow)?);
        }

        histogram!("mintage.burn.amount", "asset" => asset.name.clone()).record(amount as f64);
        counter!("mintage.burn.total", "asset" => asset.name.clone()).increment(1);

        Ok(())
    }

    /// Move `value` into the store for (account, kind), appending a
    /// deposit record. Consumes the value.
    pub fn deposit(&mut self, account: AccountId, value: Value) -> Result<(), LedgerError> {
        let key = (account, value.kind());
        let Some(store) = self.stores.get_mut(&key) else {
            value.take();
            return Err(LedgerError::NotPublished);
        };
        if store.held_amount().checked_add(value.amount()).is_none() {
            value.take();
            return Err(LedgerError::Overflow);
        }

        store.absorb(value);
        Ok(())
    }

    /// Extract `amount` from the signer's store, appending a withdraw
    /// record. The balance is checked before anything — including the
    /// event record — is written, so a failed withdraw leaves no trace.
    pub fn withdraw(
        &mut self,
        signer: &Signer,
        kind: KindId,
        amount: u64,
    ) -> Result<Value, LedgerError> {
        let key = (signer.account(), kind);
        let store = self.stores.get_mut(&key).ok_or(LedgerError::NotPublished)?;
        if store.held_amount() < amount {
            return Err(LedgerError::InsufficientBalance);
        }

        Ok(store.release(amount))
    }

    /// Withdraw from the signer and deposit to `to` as one transition.
    ///
    /// Both legs are validated up front — withdraw-side failures are
    /// reported first — so a failing transfer touches neither balance
    /// and appends to neither sink.
    pub fn transfer(
        &mut self,
        signer: &Signer,
        to: AccountId,
        kind: KindId,
        amount: u64,
    ) -> Result<(), LedgerError> {
        let from_key = (signer.account(), kind);
        let to_key = (to, kind);

        let held = self
            .stores
            .get(&from_key)
            .ok_or(LedgerError::NotPublished)?
            .held_amount();
        if held < amount {
            return Err(LedgerError::InsufficientBalance);
        }
        let destination = self.stores.get(&to_key).ok_or(LedgerError::NotPublished)?;
        if from_key != to_key
            && destination
                .held_amount()
                .checked_add(amount)
                .is_none()
        {
            return Err(LedgerError::Overflow);
        }

        let value = self
            .stores
            .get_mut(&from_key)
            .unwrap_or_else(|| unreachable!("validated above"))
            .release(amount);
        self.stores
            .get_mut(&to_key)
            .unwrap_or_else(|| unreachable!("validated above"))
            .absorb(value);

        histogram!("mintage.transfer.amount").record(amount as f64);
        counter!("mintage.transfer.total").increment(1);

        Ok(())
    }

    // Read accessors

    /// Held amount in the store for (account, kind).
    pub fn balance(&self, account: AccountId, kind: KindId) -> Result<u64, LedgerError> {
        self.stores
            .get(&(account, kind))
            .map(AccountStore::held_amount)
            .ok_or(LedgerError::NotPublished)
    }

    pub fn name(&self, kind: KindId) -> Result<&str, LedgerError> {
        self.asset(kind).map(|a| a.name.as_str())
    }

    pub fn scaling_factor(&self, kind: KindId) -> Result<u64, LedgerError> {
        self.asset(kind).map(|a| a.scaling_factor)
    }

    /// Tracked supply for `kind`; `None` when the kind was initialized
    /// without supply monitoring.
    pub fn supply(&self, kind: KindId) -> Result<Option<u64>, LedgerError> {
        self.asset(kind).map(|a| a.supply)
    }

    /// Whether a descriptor has been published for `kind`. Never fails.
    pub fn is_published(&self, kind: KindId) -> bool {
        self.assets.contains_key(&kind)
    }

    /// Whether a store exists for (account, kind). Never fails.
    pub fn has_store(&self, account: AccountId, kind: KindId) -> bool {
        self.stores.contains_key(&(account, kind))
    }

    /// Deposit records for (account, kind), oldest first.
    pub fn deposit_events(
        &self,
        account: AccountId,
        kind: KindId,
    ) -> Result<&[EventRecord], LedgerError> {
        self.store(account, kind).map(AccountStore::deposits)
    }

    /// Withdraw records for (account, kind), oldest first.
    pub fn withdraw_events(
        &self,
        account: AccountId,
        kind: KindId,
    ) -> Result<&[EventRecord], LedgerError> {
        self.store(account, kind).map(AccountStore::withdrawals)
    }

    fn asset(&self, kind: KindId) -> Result<&AssetType, LedgerError> {
        self.assets.get(&kind).ok_or(LedgerError::NotPublished)
    }

    fn store(&self, account: AccountId, kind: KindId) -> Result<&AccountStore, LedgerError> {
        self.stores
            .get(&(account, kind))
            .ok_or(LedgerError::NotPublished)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryRegistry;

    fn setup() -> (Ledger, Signer, KindId) {
        let issuer = AccountId::new();
        let kind = KindId::new();
        let mut registry = MemoryRegistry::new();
        registry.assign(kind, issuer);

        (Ledger::new(Box::new(registry)), Signer::new(issuer), kind)
    }

    #[test]
    fn initialize_requires_canonical_owner() {
        let (mut ledger, _, kind) = setup();
        let stranger = Signer::new(AccountId::new());

        let result = ledger.initialize(&stranger, kind, "GOLD", 100, true);
        assert!(matches!(result, Err(LedgerError::AddressMismatch)));
        assert!(!ledger.is_published(kind));
    }

    #[test]
    fn initialize_rejects_unknown_kind() {
        let (mut ledger, issuer, _) = setup();
        let unknown = KindId::new();

        let result = ledger.initialize(&issuer, unknown, "GOLD", 100, true);
        assert!(matches!(result, Err(LedgerError::AddressMismatch)));
    }

    #[test]
    fn initialize_publishes_exactly_once() {
        let (mut ledger, issuer, kind) = setup();

        let (_mint, _burn) = ledger.initialize(&issuer, kind, "GOLD", 100, true).unwrap();
        assert!(ledger.is_published(kind));
        assert_eq!(ledger.name(kind).unwrap(), "GOLD");
        assert_eq!(ledger.scaling_factor(kind).unwrap(), 100);
        assert_eq!(ledger.supply(kind).unwrap(), Some(0));

        let again = ledger.initialize(&issuer, kind, "GOLD", 100, true);
        assert!(matches!(again, Err(LedgerError::AlreadyPublished)));
    }

    #[test]
    fn untracked_kind_has_no_supply() {
        let (mut ledger, issuer, kind) = setup();
        let (mint, _burn) = ledger
            .initialize(&issuer, kind, "SAND", 1, false)
            .unwrap();

        let value = ledger.mint(500, &mint).unwrap();
        assert_eq!(ledger.supply(kind).unwrap(), None);
        assert_eq!(value.amount(), 500);
        value.take();
    }

    #[test]
    fn register_rejects_duplicates_and_starts_empty() {
        let (mut ledger, _issuer, kind) = setup();
        let account = AccountId::new();

        ledger.register(account, kind).unwrap();
        assert_eq!(ledger.balance(account, kind).unwrap(), 0);
        assert!(ledger.has_store(account, kind));

        let again = ledger.register(account, kind);
        assert!(matches!(again, Err(LedgerError::AlreadyPublished)));
    }

    #[test]
    fn mint_requires_published_descriptor() {
        let (mut ledger, issuer, kind) = setup();
        let (mint, burn) = ledger.initialize(&issuer, kind, "GOLD", 100, true).unwrap();

        // A second ledger that never saw this kind rejects the same cap.
        let mut other = Ledger::new(Box::new(MemoryRegistry::new()));
        assert!(matches!(other.mint(1, &mint), Err(LedgerError::NotPublished)));
        assert!(matches!(
            other.burn(Value::zero(kind), &burn),
            Err(LedgerError::NotPublished)
        ));
    }

    #[test]
    fn supply_overflow_is_fatal() {
        let (mut ledger, issuer, kind) = setup();
        let (mint, burn) = ledger.initialize(&issuer, kind, "GOLD", 100, true).unwrap();

        let v = ledger.mint(u64::MAX, &mint).unwrap();
        assert!(matches!(ledger.mint(1, &mint), Err(LedgerError::Overflow)));
        ledger.burn(v, &burn).unwrap();
        assert_eq!(ledger.supply(kind).unwrap(), Some(0));
    }

    #[test]
    fn supply_underflow_is_fatal() {
        // Two ledgers publish the same kind; a value minted on one is
        // worth more than the other's tracked supply.
        let issuer = AccountId::new();
        let kind = KindId::new();
        let signer = Signer::new(issuer);

        let mut registry_a = MemoryRegistry::new();
        registry_a.assign(kind, issuer);
        let mut registry_b = MemoryRegistry::new();
        registry_b.assign(kind, issuer);

        let mut ledger_a = Ledger::new(Box::new(registry_a));
        let mut ledger_b = Ledger::new(Box::new(registry_b));
        let (mint_a, _burn_a) = ledger_a.initialize(&signer, kind, "GOLD", 100, true).unwrap();
        let (mint_b, burn_b) = ledger_b.initialize(&signer, kind, "GOLD", 100, true).unwrap();

        let big = ledger_a.mint(100, &mint_a).unwrap();
        let small = ledger_b.mint(10, &mint_b).unwrap();

        assert!(matches!(
            ledger_b.burn(big, &burn_b),
            Err(LedgerError::Underflow)
        ));
        // The failed burn left the tracked supply untouched.
        assert_eq!(ledger_b.supply(kind).unwrap(), Some(10));
        ledger_b.burn(small, &burn_b).unwrap();
    }

    #[test]
    fn burn_accepts_zero_amounts() {
        let (mut ledger, issuer, kind) = setup();
        let (_mint, burn) = ledger.initialize(&issuer, kind, "GOLD", 100, true).unwrap();

        ledger.burn(Value::zero(kind), &burn).unwrap();
        assert_eq!(ledger.supply(kind).unwrap(), Some(0));
    }
}
