//! Batch front end for [`crate::bank::Bank`]: reads an operation script as CSV,
//! runs it and prints the resulting accounts. Kept inside the library so the
//! integration tests can drive it directly.

use std::io::{Read, Write};

use crate::{
    bank::Bank,
    policy::Policy,
    processor::{
        OperationProcessor, ProcessError, in_memory_processor::InMemoryOperationProcessor,
    },
};
use anyhow::Result;
use csv_parser::CsvOperationParser;
use csv_printer::{AccountRow, history_rows, print_rows};
use thiserror::Error;
pub mod csv_parser;
pub mod csv_printer;

#[derive(Debug, Error)]
pub enum RowError {
    #[error("Malformed row: {0}")]
    Malformed(#[from] csv::Error),
    #[error(transparent)]
    Rejected(#[from] ProcessError),
}

impl RowError {
    /// Malformed rows, missing fields and unknown accounts are mistakes in the
    /// script; business rule rejections are expected outcomes.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, RowError::Rejected(ProcessError::AccountErr(_)))
    }
}

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub policy: Policy,
    /// Append every account's ledger after the summary table.
    pub show_history: bool,
    pub error_printer: Box<dyn FnMut(u64, RowError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvOperationParser::new(self.input);

        let mut processor = InMemoryOperationProcessor::new(Bank::with_policy(self.policy));

        for (line, row) in parser {
            let result = row.map_err(RowError::from).and_then(|op| {
                let (kind, fields) = op.into_parts();
                processor
                    .process_operation(kind, fields)
                    .map_err(RowError::from)
            });
            match result {
                Ok(outcome) => tracing::debug!(line, ?outcome, "Operation processed"),
                Err(err) => (self.error_printer)(line, err),
            }
        }

        let bank = &processor.bank;
        print_rows(&mut *self.output, bank.list().into_iter().map(AccountRow::from))?;
        if self.show_history {
            writeln!(self.output)?;
            print_rows(&mut *self.output, bank.accounts().flat_map(history_rows))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::{account::AccountError, bank::BankError, command::AccountCommandError};

    use super::*;

    #[test]
    fn script_mistakes_are_reportable() {
        let not_found = RowError::from(ProcessError::from(BankError::AccountNotFound(
            "XXX".to_string(),
        )));
        assert!(not_found.is_reportable());
        assert_eq!(not_found.to_string(), "Account not found: XXX");

        let missing = RowError::from(ProcessError::from(AccountCommandError::AmountRequired {
            kind: crate::command::OperationKind::Deposit,
        }));
        assert!(missing.is_reportable());

        let rejected = RowError::from(ProcessError::from(AccountError::InvalidAmount {
            amount: dec!(-1),
        }));
        assert!(!rejected.is_reportable());
    }
}
