use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

use crate::{
    ledger::{EntryKind, LedgerEntry},
    policy::Policy,
};

pub type AccountId = String;

/// Behavioral kind of an account, fixed when the account is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Savings { interest_rate_percent: Decimal },
    Checking { overdraft_limit: Decimal },
}

impl AccountKind {
    pub fn id_prefix(&self) -> &'static str {
        match self {
            AccountKind::Savings { .. } => "SAV",
            AccountKind::Checking { .. } => "CHK",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Savings { .. } => "Savings",
            AccountKind::Checking { .. } => "Checking",
        }
    }

    /// Interest rate for savings, overdraft limit for checking.
    pub fn parameter(&self) -> Decimal {
        match *self {
            AccountKind::Savings {
                interest_rate_percent,
            } => interest_rate_percent,
            AccountKind::Checking { overdraft_limit } => overdraft_limit,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum AccountEventKind {
    Deposited,
    Withdrawn,
    InterestAccrued,
    /// Withdrawal that left the balance negative, followed by the fee.
    Overdrawn { fee: Decimal, before_fee: Decimal },
}

/// Outcome of a validated request; `balance_after` is already known to fit.
#[derive(Debug)]
pub(crate) struct AccountEvent {
    amount: Decimal,
    balance_after: Decimal,
    kind: AccountEventKind,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid amount {amount}, amount must be positive")]
    InvalidAmount { amount: Decimal },
    #[error("Insufficient funds, balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Decimal, requested: Decimal },
    #[error(
        "Minimum balance of {minimum} must be maintained, balance {balance}, requested {requested}"
    )]
    BelowMinimumBalance {
        minimum: Decimal,
        balance: Decimal,
        requested: Decimal,
    },
    #[error(
        "Overdraft limit exceeded, balance {balance}, overdraft limit {overdraft_limit}, requested {requested}"
    )]
    OverdraftLimitExceeded {
        balance: Decimal,
        overdraft_limit: Decimal,
        requested: Decimal,
    },
    #[error("Interest can only be accrued on savings accounts, not {kind}")]
    InterestNotSupported { kind: &'static str },
    #[error("Amount is too large, the resulting balance cannot be represented")]
    AmountOverflow,
}

#[derive(Debug)]
pub struct Account {
    id: AccountId,
    holder_name: String,
    balance: Decimal,
    ledger: Vec<LedgerEntry>,
    kind: AccountKind,
    policy: Policy,
}

impl Account {
    /// A positive initial balance is recorded as the opening deposit; anything
    /// else sets the balance without an entry.
    pub(crate) fn open(
        id: AccountId,
        holder_name: String,
        initial_balance: Decimal,
        kind: AccountKind,
        policy: Policy,
    ) -> Self {
        let mut ledger = Vec::new();
        if initial_balance > Decimal::ZERO {
            ledger.push(LedgerEntry::new(
                EntryKind::Deposit,
                initial_balance,
                initial_balance,
            ));
        } else if initial_balance < Decimal::ZERO {
            tracing::warn!(
                account = %id,
                initial_balance = %initial_balance,
                "Account opened with a negative balance"
            );
        }
        Self {
            id,
            holder_name,
            balance: initial_balance,
            ledger,
            kind,
            policy,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn history(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    /// Returns the new balance.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        let evt = self.handle_deposit(amount)?;
        Ok(self.apply(evt))
    }

    /// Returns the final balance, after the overdraft fee if one was charged.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        let evt = self.handle_withdrawal(amount)?;
        Ok(self.apply(evt))
    }

    /// Returns the interest credited.
    pub fn accrue_interest(&mut self) -> Result<Decimal, AccountError> {
        let evt = self.handle_interest()?;
        let interest = evt.amount;
        self.apply(evt);
        Ok(interest)
    }

    /// Commits a validated event: sets the balance computed by the handler and
    /// appends every ledger entry the event produces in one step.
    pub(crate) fn apply(&mut self, event: AccountEvent) -> Decimal {
        match event.kind {
            AccountEventKind::Deposited => {
                self.ledger.push(LedgerEntry::new(
                    EntryKind::Deposit,
                    event.amount,
                    event.balance_after,
                ));
            }
            AccountEventKind::Withdrawn => {
                self.ledger.push(LedgerEntry::new(
                    EntryKind::Withdraw,
                    event.amount,
                    event.balance_after,
                ));
            }
            AccountEventKind::InterestAccrued => {
                self.ledger.push(LedgerEntry::new(
                    EntryKind::Interest,
                    event.amount,
                    event.balance_after,
                ));
            }
            AccountEventKind::Overdrawn { fee, before_fee } => {
                self.ledger.extend([
                    LedgerEntry::new(EntryKind::Withdraw, event.amount, before_fee),
                    LedgerEntry::new(EntryKind::OverdraftFee, fee, event.balance_after),
                ]);
            }
        }
        self.balance = event.balance_after;
        tracing::debug!(
            account = %self.id,
            event = ?event.kind,
            amount = %event.amount,
            balance = %self.balance,
            "Applied account event"
        );
        self.balance
    }

    pub(crate) fn handle_deposit(&self, amount: Decimal) -> Result<AccountEvent, AccountError> {
        ensure_positive(amount)?;
        Ok(AccountEvent {
            amount,
            balance_after: checked(self.balance.checked_add(amount))?,
            kind: AccountEventKind::Deposited,
        })
    }

    pub(crate) fn handle_withdrawal(&self, amount: Decimal) -> Result<AccountEvent, AccountError> {
        ensure_positive(amount)?;
        let remaining = checked(self.balance.checked_sub(amount))?;
        match self.kind {
            AccountKind::Savings { .. } => {
                if remaining < self.policy.min_balance {
                    return Err(AccountError::BelowMinimumBalance {
                        minimum: self.policy.min_balance,
                        balance: self.balance,
                        requested: amount,
                    });
                }
                self.handle_base_withdrawal(amount, remaining)
            }
            AccountKind::Checking { overdraft_limit } => {
                // a sum past Decimal::MAX leaves room for any amount
                let exceeded = match self.balance.checked_add(overdraft_limit) {
                    Some(ceiling) => amount > ceiling,
                    None => self.balance < Decimal::ZERO,
                };
                if exceeded {
                    return Err(AccountError::OverdraftLimitExceeded {
                        balance: self.balance,
                        overdraft_limit,
                        requested: amount,
                    });
                }
                if remaining < Decimal::ZERO {
                    let fee = self.policy.overdraft_fee;
                    Ok(AccountEvent {
                        amount,
                        balance_after: checked(remaining.checked_sub(fee))?,
                        kind: AccountEventKind::Overdrawn {
                            fee,
                            before_fee: remaining,
                        },
                    })
                } else {
                    self.handle_base_withdrawal(amount, remaining)
                }
            }
        }
    }

    pub(crate) fn handle_interest(&self) -> Result<AccountEvent, AccountError> {
        let AccountKind::Savings {
            interest_rate_percent,
        } = self.kind
        else {
            return Err(AccountError::InterestNotSupported {
                kind: self.kind.label(),
            });
        };
        let interest = checked(
            self.balance
                .checked_mul(interest_rate_percent)
                .and_then(|product| product.checked_div(dec!(100))),
        )?;
        Ok(AccountEvent {
            amount: interest,
            balance_after: checked(self.balance.checked_add(interest))?,
            kind: AccountEventKind::InterestAccrued,
        })
    }

    /// Plain withdrawal rule shared by every kind: never below zero.
    fn handle_base_withdrawal(
        &self,
        amount: Decimal,
        remaining: Decimal,
    ) -> Result<AccountEvent, AccountError> {
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }
        Ok(AccountEvent {
            amount,
            balance_after: remaining,
            kind: AccountEventKind::Withdrawn,
        })
    }
}

fn checked(value: Option<Decimal>) -> Result<Decimal, AccountError> {
    value.ok_or(AccountError::AmountOverflow)
}

fn ensure_positive(amount: Decimal) -> Result<(), AccountError> {
    if amount <= Decimal::ZERO {
        Err(AccountError::InvalidAmount { amount })
    } else {
        Ok(())
    }
}
