//! Example: Print wallet balances and the latest transactions
//!
//! Reads the token from `QIWI_TOKEN` or a `qiwi.toml`/`qiwi.json` file.
//!
//! ```bash
//! QIWI_TOKEN=... RUST_LOG=qiwi_infra=debug cargo run --example wallet_balance
//! ```

use anyhow::Context;
use qiwi_domain::{HistoryFilter, Operation};
use qiwi_infra::{config, QiwiClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = config::load().context("no QIWI configuration found")?;
    let token = settings.token.context("access token is not configured")?;

    let client = QiwiClient::builder().token(token).config(settings.client).connect().await?;
    println!("Connected to {client}");

    for balance in client.balance(true).await? {
        println!("  {balance}");
    }

    let recent = client.history(&HistoryFilter::new().rows(5).operation(Operation::All)).await?;
    let count = recent["data"].as_array().map_or(0, Vec::len);
    println!("Last {count} transactions:\n{}", serde_json::to_string_pretty(&recent["data"])?);

    Ok(())
}
