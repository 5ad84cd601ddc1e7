use std::fs::File;

use anyhow::{Context, Result};
use bank_ledger::{
    bin_utils::{RowError, Service},
    policy::Policy,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let filename = args
        .next()
        .context("Expected a file name as the first argument")?;
    let show_history = match args.next().as_deref() {
        None => false,
        Some("--history") => true,
        Some(other) => anyhow::bail!("Unknown argument `{other}`"),
    };
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        policy: Policy::default(),
        show_history,
        error_printer: Box::new(|line, err: RowError| {
            if err.is_reportable() {
                eprintln!("Error at line {line}: {err}")
            } else {
                // business rule rejections are expected, not technical errors
                tracing::debug!(line, error = %err, "Operation rejected")
            }
        }),
    };
    service.run()
}
