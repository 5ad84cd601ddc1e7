use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Deposit,
    Withdraw,
    Interest,
    OverdraftFee,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Deposit => "DEPOSIT",
            EntryKind::Withdraw => "WITHDRAW",
            EntryKind::Interest => "INTEREST",
            EntryKind::OverdraftFee => "OVERDRAFT_FEE",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One balance-affecting event. Entries are only created by [`crate::account::Account`]
/// and carry the balance right after the event, so the log alone describes the
/// full balance history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    kind: EntryKind,
    amount: Decimal,
    timestamp: DateTime<Utc>,
    balance_after: Decimal,
}

impl LedgerEntry {
    pub(crate) fn new(kind: EntryKind, amount: Decimal, balance_after: Decimal) -> Self {
        Self {
            kind,
            amount,
            timestamp: Utc::now(),
            balance_after,
        }
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn balance_after(&self) -> Decimal {
        self.balance_after
    }
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<13} | {:>10.2} | {} | {:.2}",
            self.kind.as_str(),
            self.amount,
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.balance_after
        )
    }
}
