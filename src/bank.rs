use std::collections::HashMap;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::{Account, AccountId, AccountKind},
    policy::Policy,
};

const FIRST_SEQUENCE: u32 = 1001;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BankError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),
}

/// Row of the "all accounts" listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub id: AccountId,
    pub holder_name: String,
    pub balance: Decimal,
    pub kind: &'static str,
}

/// Owns every account, hands out ids and resolves them back.
#[derive(Debug)]
pub struct Bank {
    accounts: Vec<Account>,
    index: HashMap<AccountId, usize>,
    next_sequence: u32,
    policy: Policy,
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

impl Bank {
    pub fn new() -> Self {
        Self::with_policy(Policy::default())
    }

    pub fn with_policy(policy: Policy) -> Self {
        Self {
            accounts: Vec::new(),
            index: HashMap::new(),
            next_sequence: FIRST_SEQUENCE,
            policy,
        }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Opens an account with the next id, e.g. `SAV1001` then `CHK1002`.
    pub fn create(
        &mut self,
        kind: AccountKind,
        holder_name: impl Into<String>,
        initial_balance: Decimal,
    ) -> &mut Account {
        let id = format!("{}{}", kind.id_prefix(), self.next_sequence);
        self.next_sequence += 1;

        let account = Account::open(
            id.clone(),
            holder_name.into(),
            initial_balance,
            kind,
            self.policy,
        );
        tracing::info!(
            account = %id,
            kind = kind.label(),
            initial_balance = %initial_balance,
            "Account created"
        );

        let pos = self.accounts.len();
        self.index.insert(id, pos);
        self.accounts.push(account);
        &mut self.accounts[pos]
    }

    pub fn find(&self, id: &str) -> Result<&Account, BankError> {
        self.index
            .get(id)
            .map(|&pos| &self.accounts[pos])
            .ok_or_else(|| BankError::AccountNotFound(id.to_string()))
    }

    pub fn find_mut(&mut self, id: &str) -> Result<&mut Account, BankError> {
        match self.index.get(id) {
            Some(&pos) => Ok(&mut self.accounts[pos]),
            None => Err(BankError::AccountNotFound(id.to_string())),
        }
    }

    /// Accounts in creation order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn list(&self) -> Vec<AccountSummary> {
        self.accounts
            .iter()
            .map(|acc| AccountSummary {
                id: acc.id().to_string(),
                holder_name: acc.holder_name().to_string(),
                balance: acc.balance(),
                kind: acc.kind().label(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
