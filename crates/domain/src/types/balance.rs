//! Funding-source accounts and the balance-only projection

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// One account of `funding-sources/v2/persons/{wallet}/accounts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingAccount {
    /// e.g. `qw_wallet_rub`
    pub alias: String,
    #[serde(default)]
    pub balance: Option<AccountBalance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBalance {
    pub amount: f64,
    #[serde(default)]
    pub currency: Option<u32>,
}

/// Reduce accounts to `{alias: amount}` entries, skipping accounts without a
/// balance. The result is never longer than the input.
pub fn project_balances(accounts: &[FundingAccount]) -> Vec<Value> {
    accounts
        .iter()
        .filter_map(|account| {
            let balance = account.balance.as_ref()?;
            let mut entry = Map::new();
            entry.insert(account.alias.clone(), json!(balance.amount));
            Some(Value::Object(entry))
        })
        .collect()
}
