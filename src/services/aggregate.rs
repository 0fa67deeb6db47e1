use crate::models::{
    balances::{AggregateSummary, Omissions},
    token::TokenBalance,
};

use super::hidden_filter::{filter_hidden, HiddenTokens};

/// Drops hidden balances from the list. The totals are taken over the full
/// list minus what the hidden set removes.
pub fn aggregate(
    balances: Vec<TokenBalance>,
    hidden: &HiddenTokens,
) -> (Vec<TokenBalance>, AggregateSummary) {
    let totals = sum(&balances);
    let (visible, omissions) = filter_hidden(balances, hidden);
    (visible, subtract_omissions(totals, omissions))
}

fn sum(balances: &[TokenBalance]) -> AggregateSummary {
    balances
        .iter()
        .fold(AggregateSummary::default(), |mut total, balance| {
            total.value += balance.market_data.value;
            total.value_change += balance.market_data.value_change;
            total
        })
}

fn subtract_omissions(mut total: AggregateSummary, omissions: Omissions) -> AggregateSummary {
    total.value -= omissions.value;
    total.value_change -= omissions.value_change;
    total
}
