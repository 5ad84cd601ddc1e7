use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::account::{AccountId, AccountKind};

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    OpenSavings,
    OpenChecking,
    Deposit,
    Withdraw,
    Interest,
}

/// Raw fields of an operation as handed over by the caller; which of them are
/// needed depends on [`OperationKind`].
#[derive(Debug, Clone, Default)]
pub struct OperationFields {
    pub account: Option<AccountId>,
    pub holder: Option<String>,
    pub amount: Option<Decimal>,
    pub param: Option<Decimal>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountCommandError {
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: OperationKind },
    #[error("Account number is required for {kind:?}")]
    AccountRequired { kind: OperationKind },
    #[error("Account holder is required for {kind:?}")]
    HolderRequired { kind: OperationKind },
    #[error("Interest rate or overdraft limit is required for {kind:?}")]
    ParameterRequired { kind: OperationKind },
    #[error("Interest rate or overdraft limit must not be negative for {kind:?}")]
    NegativeParameter { kind: OperationKind },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankCommand {
    Open {
        kind: AccountKind,
        holder_name: String,
        initial_balance: Decimal,
    },
    Deposit {
        account: AccountId,
        amount: Decimal,
    },
    Withdraw {
        account: AccountId,
        amount: Decimal,
    },
    AccrueInterest {
        account: AccountId,
    },
}

impl BankCommand {
    /// Checks that every field the operation needs is present. Amount signs are
    /// left to the account, which owns that rule.
    pub fn parse_command(
        kind: OperationKind,
        fields: OperationFields,
    ) -> Result<Self, AccountCommandError> {
        match kind {
            OperationKind::OpenSavings => {
                let (holder_name, initial_balance, param) = Self::parse_open(kind, fields)?;
                Ok(Self::Open {
                    kind: AccountKind::Savings {
                        interest_rate_percent: param,
                    },
                    holder_name,
                    initial_balance,
                })
            }
            OperationKind::OpenChecking => {
                let (holder_name, initial_balance, param) = Self::parse_open(kind, fields)?;
                Ok(Self::Open {
                    kind: AccountKind::Checking {
                        overdraft_limit: param,
                    },
                    holder_name,
                    initial_balance,
                })
            }
            OperationKind::Deposit => {
                let (account, amount) = Self::parse_transfer(kind, fields)?;
                Ok(Self::Deposit { account, amount })
            }
            OperationKind::Withdraw => {
                let (account, amount) = Self::parse_transfer(kind, fields)?;
                Ok(Self::Withdraw { account, amount })
            }
            OperationKind::Interest => {
                let account = fields
                    .account
                    .ok_or(AccountCommandError::AccountRequired { kind })?;
                Ok(Self::AccrueInterest { account })
            }
        }
    }

    fn parse_open(
        kind: OperationKind,
        fields: OperationFields,
    ) -> Result<(String, Decimal, Decimal), AccountCommandError> {
        let Some(holder) = fields.holder else {
            return Err(AccountCommandError::HolderRequired { kind });
        };
        let Some(param) = fields.param else {
            return Err(AccountCommandError::ParameterRequired { kind });
        };
        if param < Decimal::ZERO {
            return Err(AccountCommandError::NegativeParameter { kind });
        }
        Ok((holder, fields.amount.unwrap_or_default(), param))
    }

    fn parse_transfer(
        kind: OperationKind,
        fields: OperationFields,
    ) -> Result<(AccountId, Decimal), AccountCommandError> {
        let Some(account) = fields.account else {
            return Err(AccountCommandError::AccountRequired { kind });
        };
        if let Some(amount) = fields.amount {
            Ok((account, amount))
        } else {
            Err(AccountCommandError::AmountRequired { kind })
        }
    }
}
