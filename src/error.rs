// src/error.rs
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    /// No descriptor for the asset kind, or no store for (account, kind).
    NotPublished,
    /// A descriptor or store already exists for that key.
    AlreadyPublished,
    /// Initializer identity is not the canonical owner of the kind.
    AddressMismatch,
    /// `destroy_zero` called on a value with a non-zero amount.
    NonZeroDestruction,
    /// Extract or withdraw amount exceeds the held amount.
    InsufficientBalance,
    /// A value of one kind was handed to an operation bound to another.
    KindMismatch,
    Overflow,
    Underflow,
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPublished => write!(f, "Not published"),
            Self::AlreadyPublished => write!(f, "Already published"),
            Self::AddressMismatch => write!(f, "Address mismatch"),
            Self::NonZeroDestruction => write!(f, "Cannot destroy a non-zero value"),
            Self::InsufficientBalance => write!(f, "Insufficient balance"),
            Self::KindMismatch => write!(f, "Asset kind mismatch"),
            Self::Overflow => write!(f, "Amount overflow"),
            Self::Underflow => write!(f, "Amount underflow"),
        }
    }
}

impl std::error::Error for LedgerError {}
