use std::io::Write;

use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{account::Account, bank::AccountSummary};

#[derive(Debug, Serialize)]
pub struct AccountRow {
    pub account: String,
    pub holder: String,
    pub kind: &'static str,
    pub balance: Decimal,
}

impl From<AccountSummary> for AccountRow {
    fn from(summary: AccountSummary) -> Self {
        Self {
            account: summary.id,
            holder: summary.holder_name,
            kind: summary.kind,
            balance: summary.balance,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryRow {
    pub account: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub amount: Decimal,
    pub timestamp: String,
    pub balance_after: Decimal,
}

pub fn history_rows(account: &Account) -> impl Iterator<Item = HistoryRow> + '_ {
    account.history().iter().map(|entry| HistoryRow {
        account: account.id().to_string(),
        kind: entry.kind().as_str(),
        amount: entry.amount(),
        timestamp: entry.timestamp().format("%Y-%m-%d %H:%M:%S").to_string(),
        balance_after: entry.balance_after(),
    })
}

pub fn print_rows<W, T>(output: &mut W, rows: impl Iterator<Item = T>) -> anyhow::Result<()>
where
    W: Write,
    T: Serialize,
{
    let mut writer = Writer::from_writer(output);
    for row in rows {
        if let Err(err) = writer.serialize(row) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
