use serde::Deserialize;

use crate::models::{
    token::TokenBalance,
    transaction::{RawTokenTransfer, TransactionRecord},
};

/// Identifies the balance a detail request refers to. All three fields are
/// compared by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BalanceKey {
    #[serde(rename = "token")]
    pub name: String,
    pub symbol: String,
    pub amount: String,
}

impl BalanceKey {
    pub fn matches(&self, balance: &TokenBalance) -> bool {
        balance.token_list_entry.name == self.name
            && balance.token_list_entry.symbol == self.symbol
            && balance.display_amount == self.amount
    }
}

/// First balance matching `key`.
pub fn resolve<'a>(balances: &'a [TokenBalance], key: &BalanceKey) -> Option<&'a TokenBalance> {
    balances.iter().find(|balance| key.matches(balance))
}

pub fn to_transactions(transfers: Vec<RawTokenTransfer>) -> Vec<TransactionRecord> {
    transfers.into_iter().map(TransactionRecord::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::token::AddressInfo;
    use crate::services::{
        network_config::{get_network_config, DEFAULT_CHAIN_ID},
        normalizer::native_balance,
    };
    use ethers::types::U256;

    fn key(name: &str, symbol: &str, amount: &str) -> BalanceKey {
        BalanceKey {
            name: name.to_string(),
            symbol: symbol.to_string(),
            amount: amount.to_string(),
        }
    }

    fn nexis_with_five() -> Vec<TokenBalance> {
        let network = get_network_config(DEFAULT_CHAIN_ID).unwrap();
        let coin = AddressInfo {
            coin_balance: U256::from(5_000_000_000_000_000_000u64),
        };
        vec![native_balance(&coin, &network)]
    }

    #[test]
    fn test_resolves_exact_key() {
        let balances = nexis_with_five();
        let found = resolve(&balances, &key("Nexis", "NZT", "5"));
        assert_eq!(found, Some(&balances[0]));
    }

    #[test]
    fn test_amount_mismatch_is_unknown() {
        let balances = nexis_with_five();
        assert_eq!(resolve(&balances, &key("Nexis", "NZT", "6")), None);
        assert_eq!(resolve(&balances, &key("Nexis", "ETH", "5")), None);
        assert_eq!(resolve(&balances, &key("nexis", "NZT", "5")), None);
    }

    #[test]
    fn test_first_match_wins() {
        let mut balances = nexis_with_five();
        let mut duplicate = balances[0].clone();
        duplicate.id = "second".to_string();
        balances.push(duplicate);

        let found = resolve(&balances, &key("Nexis", "NZT", "5")).unwrap();
        assert_eq!(found.id, balances[0].id);
    }

    #[test]
    fn test_key_from_query() {
        let parsed: BalanceKey = serde_json::from_str(
            r#"{"token": "USD Coin", "symbol": "USDC", "amount": "5"}"#,
        )
        .unwrap();
        assert_eq!(parsed, key("USD Coin", "USDC", "5"));
    }
}
