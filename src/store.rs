// src/store.rs
use crate::{KindId, Value};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One append-only sink entry. Whether it is a deposit or a withdrawal
/// is carried by which sink it sits in; ordering within a sink is append
/// order. External indexers drain these — this core only appends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: Uuid,
    pub amount: u64,
    pub created_at: DateTime<Utc>,
}

impl EventRecord {
    pub(crate) fn new(amount: u64) -> Self {
        Self {
            id: Uuid::now_v7(),
            amount,
            created_at: Utc::now(),
        }
    }
}

/// Per-(account, kind) holding cell plus its two event sinks.
///
/// Created once by `Ledger::register` and never removed; mutated only by
/// deposit and withdraw.
#[derive(Debug)]
pub struct AccountStore {
    held: Value,
    deposits: Vec<EventRecord>,
    withdrawals: Vec<EventRecord>,
}

impl AccountStore {
    pub(crate) fn new(kind: KindId) -> Self {
        Self {
            held: Value::zero(kind),
            deposits: Vec::new(),
            withdrawals: Vec::new(),
        }
    }

    pub fn held_amount(&self) -> u64 {
        self.held.amount()
    }

    pub fn deposits(&self) -> &[EventRecord] {
        &self.deposits
    }

    pub fn withdrawals(&self) -> &[EventRecord] {
        &self.withdrawals
    }

    /// Merge `value` into the held cell, recording a deposit event.
    /// Caller has already validated kind and overflow.
    pub(crate) fn absorb(&mut self, value: Value) {
        self.deposits.push(EventRecord::new(value.amount()));
        self.held
            .merge(value)
            .unwrap_or_else(|_| unreachable!("deposit validated before absorb"));
    }

    /// Extract `amount` from the held cell, recording a withdraw event.
    /// Caller has already validated the held amount covers it.
    pub(crate) fn release(&mut self, amount: u64) -> Value {
        self.withdrawals.push(EventRecord::new(amount));
        self.held
            .extract(amount)
            .unwrap_or_else(|_| unreachable!("withdraw validated before release"))
    }
}

impl Drop for AccountStore {
    fn drop(&mut self) {
        // Tearing down the store tears down its held value with it; that
        // is storage teardown, not a leaked value.
        self.held.defuse();
    }
}
