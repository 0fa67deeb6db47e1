use std::collections::HashSet;

use crate::models::{balances::Omissions, token::TokenBalance};

/// Tokens the user has hidden, keyed by the `token` display name of a balance
/// (`"{name}( {symbol} )"` on the list path), not by contract address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiddenTokens(HashSet<String>);

impl HiddenTokens {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Parses a comma separated list, ignoring blank entries.
    pub fn from_query(raw: Option<&str>) -> Self {
        Self::new(
            raw.unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty()),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn hides(&self, balance: &TokenBalance) -> bool {
        self.0.contains(&balance.token)
    }
}

/// Splits off hidden balances, returning the visible ones and what was removed.
pub fn filter_hidden(
    balances: Vec<TokenBalance>,
    hidden: &HiddenTokens,
) -> (Vec<TokenBalance>, Omissions) {
    let mut omissions = Omissions::default();
    if hidden.is_empty() {
        return (balances, omissions);
    }

    let visible = balances
        .into_iter()
        .filter(|balance| {
            if hidden.hides(balance) {
                omissions.value += balance.market_data.value;
                omissions.value_change += balance.market_data.value_change;
                return false;
            }
            true
        })
        .collect();

    (visible, omissions)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::token::{MarketData, TokenListEntry};

    pub(crate) fn balance(token: &str, value: f64, value_change: f64) -> TokenBalance {
        TokenBalance {
            id: token.to_string(),
            address: token.to_string(),
            display_amount: "1".to_string(),
            token: token.to_string(),
            market_data: MarketData {
                id: token.to_string(),
                percent_change: 0.0,
                value,
                value_change,
            },
            token_list_entry: TokenListEntry {
                id: token.to_string(),
                address: token.to_string(),
                logo: String::new(),
                name: token.to_string(),
                symbol: token.to_string(),
            },
        }
    }

    #[test]
    fn test_empty_hidden_set_passes_through() {
        let balances = vec![balance("A( A )", 3.0, 1.0), balance("B( B )", 2.0, -1.0)];

        let (visible, omissions) = filter_hidden(balances.clone(), &HiddenTokens::default());

        assert_eq!(visible, balances);
        assert_eq!(omissions, Omissions::default());
    }

    #[test]
    fn test_hidden_balance_is_removed_and_omitted() {
        let balances = vec![balance("A( A )", 3.0, 1.0), balance("B( B )", 2.0, -1.5)];
        let hidden = HiddenTokens::new(["B( B )"]);

        let (visible, omissions) = filter_hidden(balances, &hidden);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].token, "A( A )");
        assert_eq!(omissions.value, 2.0);
        assert_eq!(omissions.value_change, -1.5);
    }

    #[test]
    fn test_match_is_exact_on_display_name() {
        let balances = vec![balance("USD Coin( USDC )", 1.0, 0.0)];

        let (visible, _) = filter_hidden(balances.clone(), &HiddenTokens::new(["USD Coin"]));
        assert_eq!(visible.len(), 1);

        let (visible, _) = filter_hidden(balances, &HiddenTokens::new(["USD Coin( USDC )"]));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_from_query() {
        assert!(HiddenTokens::from_query(None).is_empty());
        assert!(HiddenTokens::from_query(Some(" , ")).is_empty());
        assert_eq!(
            HiddenTokens::from_query(Some("USD Coin( USDC ), Tether( USDT )")),
            HiddenTokens::new(["USD Coin( USDC )", "Tether( USDT )"])
        );
    }
}
