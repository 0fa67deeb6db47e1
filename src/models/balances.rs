use serde::{Deserialize, Serialize};

use super::{token::TokenBalance, transaction::TransactionRecord};

/// Value and value-change removed from the totals by the hidden-token filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Omissions {
    pub value: f64,
    pub value_change: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSummary {
    pub value: f64,
    pub value_change: f64,
}

/// Result of the balance list path.
#[derive(Debug, Serialize)]
pub struct BalanceList {
    pub aggregate: AggregateSummary,
    pub balances: Vec<TokenBalance>,
}

/// Result of the balance detail path.
#[derive(Debug, Serialize)]
pub struct BalanceDetails {
    pub token: TokenBalance,
    pub transactions: Vec<TransactionRecord>,
}
