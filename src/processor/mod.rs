use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::{AccountError, AccountId},
    bank::BankError,
    command::{AccountCommandError, OperationFields, OperationKind},
};

pub mod in_memory_processor;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    CommandErr(#[from] AccountCommandError),
    #[error(transparent)]
    BankErr(#[from] BankError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

/// What a successful operation reports back for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Opened { account: AccountId },
    Balance { account: AccountId, balance: Decimal },
    Interest {
        account: AccountId,
        interest: Decimal,
        balance: Decimal,
    },
}

pub trait OperationProcessor {
    fn process_operation(
        &mut self,
        kind: OperationKind,
        fields: OperationFields,
    ) -> Result<Outcome, ProcessError>;
}
