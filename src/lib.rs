/// Immutable records of balance-affecting events.
pub mod ledger;

/// Savings and checking accounts with their withdrawal rules.
/// State is modified using events, which are created by validating a request
/// against the current balance.
pub mod account;

/// Constants accounts are opened under (minimum balance, overdraft fee).
pub mod policy;

/// Account registry: id assignment, lookup and listing.
pub mod bank;

/// Turns raw operation fields into commands executed against the [`bank`].
pub mod command;

/// Operation processor interface, plus "in memory" implementation.
/// Resolves accounts through the [`bank`] and runs commands on them.
pub mod processor;

/// CSV front end used by the binary and the integration tests.
pub mod bin_utils;
