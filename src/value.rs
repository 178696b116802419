// src/value.rs
use crate::{KindId, LedgerError};

/// An owned quantity of one asset kind.
///
/// A `Value` cannot be cloned, copied, or serialized — the only ways to
/// create one are `Ledger::mint`, `Ledger::withdraw`, [`Value::zero`],
/// and [`Value::extract`], and the only ways to get rid of one are
/// `Ledger::burn`, `Ledger::deposit`, [`Value::merge`], and
/// [`Value::destroy_zero`]. Dropping a non-zero `Value` without going
/// through one of those panics: silently losing value is a bug in the
/// caller, not something to paper over.
///
/// Operations that take `self` consume the value even when they fail;
/// every failure aborts the host's enclosing unit of work, so nothing of
/// the failed path is observable in a conforming embedding.
#[must_use = "a Value must be deposited, burned, merged, or destroyed"]
#[derive(Debug)]
pub struct Value {
    kind: KindId,
    amount: u64,
}

impl Value {
    pub(crate) fn new(kind: KindId, amount: u64) -> Self {
        Self { kind, amount }
    }

    /// An empty value of the given kind. Always succeeds.
    pub fn zero(kind: KindId) -> Self {
        Self { kind, amount: 0 }
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn kind(&self) -> KindId {
        self.kind
    }

    /// Consume the value and hand back its amount, disarming the drop
    /// guard. Every consuming operation funnels through here.
    pub(crate) fn take(mut self) -> u64 {
        std::mem::replace(&mut self.amount, 0)
    }

    /// Disarm the drop guard in place. Only for tearing down storage
    /// that owns a held value (dropping a whole `Ledger` drops its
    /// stores, which is not a value leak).
    pub(crate) fn defuse(&mut self) {
        self.amount = 0;
    }

    /// Split `amount` off into a new value, reducing `self` in place.
    ///
    /// `extract` followed by [`merge`](Self::merge) of the result is the
    /// identity on the amount.
    pub fn extract(&mut self, amount: u64) -> Result<Value, LedgerError> {
        if amount > self.amount {
            return Err(LedgerError::InsufficientBalance);
        }
        self.amount -= amount;
        Ok(Value::new(self.kind, amount))
    }

    /// Absorb `other` into `self`. `other` is consumed unconditionally.
    pub fn merge(&mut self, other: Value) -> Result<(), LedgerError> {
        if other.kind != self.kind {
            other.take();
            return Err(LedgerError::KindMismatch);
        }
        match self.amount.checked_add(other.take()) {
            Some(total) => {
                self.amount = total;
                Ok(())
            }
            None => Err(LedgerError::Overflow),
        }
    }

    /// Destroy a value whose amount is exactly zero.
    pub fn destroy_zero(self) -> Result<(), LedgerError> {
        if self.take() != 0 {
            return Err(LedgerError::NonZeroDestruction);
        }
        Ok(())
    }
}

impl Drop for Value {
    fn drop(&mut self) {
        if self.amount != 0 && !std::thread::panicking() {
            panic!(
                "dropped a live Value of amount {} — deposit, burn, merge, or destroy it",
                self.amount
            );
        }
    }
}
