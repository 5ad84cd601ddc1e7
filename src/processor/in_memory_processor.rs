use crate::{
    bank::Bank,
    command::{BankCommand, OperationFields, OperationKind},
};

use super::{OperationProcessor, Outcome, ProcessError};

#[derive(Debug, Default)]
pub struct InMemoryOperationProcessor {
    pub bank: Bank,
}

impl InMemoryOperationProcessor {
    pub fn new(bank: Bank) -> Self {
        Self { bank }
    }
}

impl OperationProcessor for InMemoryOperationProcessor {
    fn process_operation(
        &mut self,
        kind: OperationKind,
        fields: OperationFields,
    ) -> Result<Outcome, ProcessError> {
        let cmd = BankCommand::parse_command(kind, fields)?;
        let outcome = match cmd {
            BankCommand::Open {
                kind,
                holder_name,
                initial_balance,
            } => {
                let acc = self.bank.create(kind, holder_name, initial_balance);
                Outcome::Opened {
                    account: acc.id().to_string(),
                }
            }
            BankCommand::Deposit { account, amount } => {
                let balance = self.bank.find_mut(&account)?.deposit(amount)?;
                Outcome::Balance { account, balance }
            }
            BankCommand::Withdraw { account, amount } => {
                let balance = self.bank.find_mut(&account)?.withdraw(amount)?;
                Outcome::Balance { account, balance }
            }
            BankCommand::AccrueInterest { account } => {
                let acc = self.bank.find_mut(&account)?;
                let interest = acc.accrue_interest()?;
                Outcome::Interest {
                    balance: acc.balance(),
                    account,
                    interest,
                }
            }
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::{account::AccountError, bank::BankError};

    use super::*;

    fn open(
        processor: &mut InMemoryOperationProcessor,
        kind: OperationKind,
        holder: &str,
        amount: Decimal,
        param: Decimal,
    ) -> Outcome {
        processor
            .process_operation(
                kind,
                OperationFields {
                    holder: Some(holder.to_string()),
                    amount: Some(amount),
                    param: Some(param),
                    ..Default::default()
                },
            )
            .unwrap()
    }

    fn on_account(account: &str, amount: Option<Decimal>) -> OperationFields {
        OperationFields {
            account: Some(account.to_string()),
            amount,
            ..Default::default()
        }
    }

    #[test]
    fn process_some_operations() {
        let mut processor = InMemoryOperationProcessor::default();
        let outcome = open(
            &mut processor,
            OperationKind::OpenSavings,
            "John Doe",
            dec!(1000),
            dec!(2.5),
        );
        assert_eq!(
            outcome,
            Outcome::Opened {
                account: "SAV1001".to_string()
            }
        );
        open(
            &mut processor,
            OperationKind::OpenChecking,
            "Jane Smith",
            dec!(500),
            dec!(1000),
        );
        assert_eq!(processor.bank.len(), 2);

        let outcome = processor
            .process_operation(
                OperationKind::Withdraw,
                on_account("SAV1001", Some(dec!(900))),
            )
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::Balance {
                account: "SAV1001".to_string(),
                balance: dec!(100)
            }
        );

        let outcome = processor
            .process_operation(OperationKind::Interest, on_account("SAV1001", None))
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::Interest {
                account: "SAV1001".to_string(),
                interest: dec!(2.5),
                balance: dec!(102.5)
            }
        );

        let outcome = processor
            .process_operation(
                OperationKind::Withdraw,
                on_account("CHK1002", Some(dec!(600))),
            )
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::Balance {
                account: "CHK1002".to_string(),
                balance: dec!(-135)
            }
        );
    }

    #[test]
    fn errors_are_reported_per_layer() {
        let mut processor = InMemoryOperationProcessor::default();
        open(
            &mut processor,
            OperationKind::OpenChecking,
            "Jane Smith",
            dec!(500),
            dec!(1000),
        );

        let err = processor
            .process_operation(OperationKind::Deposit, on_account("XXX", Some(dec!(1))))
            .unwrap_err();
        assert!(matches!(
            err,
            ProcessError::BankErr(BankError::AccountNotFound(ref id)) if id == "XXX"
        ));

        let err = processor
            .process_operation(OperationKind::Deposit, on_account("CHK1001", None))
            .unwrap_err();
        assert!(matches!(err, ProcessError::CommandErr(_)));

        let err = processor
            .process_operation(
                OperationKind::Deposit,
                on_account("CHK1001", Some(Decimal::ZERO)),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ProcessError::AccountErr(AccountError::InvalidAmount { .. })
        ));

        let err = processor
            .process_operation(OperationKind::Interest, on_account("CHK1001", None))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Interest can only be accrued on savings accounts, not Checking"
        );
        assert_eq!(processor.bank.find("CHK1001").unwrap().balance(), dec!(500));
    }
}
