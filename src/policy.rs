use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Lowest balance a savings withdrawal may leave behind.
pub const MIN_BALANCE: Decimal = dec!(100.00);

/// Charged once when a checking withdrawal drives the balance below zero.
pub const OVERDRAFT_FEE: Decimal = dec!(35.00);

/// Business constants an account is opened under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub min_balance: Decimal,
    pub overdraft_fee: Decimal,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            min_balance: MIN_BALANCE,
            overdraft_fee: OVERDRAFT_FEE,
        }
    }
}
