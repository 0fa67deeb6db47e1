use ethers::{types::U256, utils};
use log::warn;

use crate::models::{
    network_config::NetworkConfig,
    token::{
        AddressInfo, MarketData, RawTokenRecord, TokenBalance, TokenListEntry, ERC20_TOKEN_TYPE,
        ZERO_ADDRESS,
    },
};

/// How the `token` display name of an ERC-20 balance is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    /// `"{name}( {symbol} )"`, the form hidden-token entries are stored in.
    Composed,
    /// The bare token name.
    Plain,
}

impl LabelStyle {
    fn label(self, name: &str, symbol: &str) -> String {
        match self {
            LabelStyle::Composed => format!("{}( {} )", name, symbol),
            LabelStyle::Plain => name.to_string(),
        }
    }
}

/// Maps the explorer's token balances to `TokenBalance`, keeping ERC-20 records only.
pub fn normalize_token_balances(
    records: &[RawTokenRecord],
    style: LabelStyle,
    network: &NetworkConfig,
) -> Vec<TokenBalance> {
    records
        .iter()
        .filter(|record| record.token.token_type == ERC20_TOKEN_TYPE)
        .map(|record| {
            let token = &record.token;
            let name = token.name.clone().unwrap_or_default();
            let symbol = token.symbol.clone().unwrap_or_default();
            let decimals = token.decimals.unwrap_or_default();

            TokenBalance {
                id: token.address.clone(),
                address: token.address.clone(),
                display_amount: format_units(record.value, decimals),
                token: style.label(&name, &symbol),
                // No pricing source yet, every ERC-20 balance is valued at zero.
                market_data: MarketData {
                    id: token.address.clone(),
                    percent_change: 0.0,
                    value: 0.0,
                    value_change: 0.0,
                },
                token_list_entry: TokenListEntry {
                    id: token.address.clone(),
                    address: token.address.clone(),
                    logo: network.token_logo.clone(),
                    name,
                    symbol,
                },
            }
        })
        .collect()
}

/// Builds the native coin record from the account's coin balance.
pub fn native_balance(info: &AddressInfo, network: &NetworkConfig) -> TokenBalance {
    TokenBalance {
        id: ZERO_ADDRESS.to_string(),
        address: ZERO_ADDRESS.to_string(),
        display_amount: format_units(info.coin_balance, network.native_decimals),
        token: network.native_name.clone(),
        // Placeholder value of 1 for the native coin.
        market_data: MarketData {
            id: ZERO_ADDRESS.to_string(),
            percent_change: 0.0,
            value: 1.0,
            value_change: 0.0,
        },
        token_list_entry: TokenListEntry {
            id: ZERO_ADDRESS.to_string(),
            address: ZERO_ADDRESS.to_string(),
            logo: network.native_logo.clone(),
            name: network.native_name.clone(),
            symbol: network.symbol.clone(),
        },
    }
}

/// Normalized ERC-20 balances followed by the native coin record.
pub fn normalize_account(
    records: &[RawTokenRecord],
    coin: &AddressInfo,
    style: LabelStyle,
    network: &NetworkConfig,
) -> Vec<TokenBalance> {
    let mut balances = normalize_token_balances(records, style, network);
    balances.push(native_balance(coin, network));
    balances
}

/// Helper function to format units with proper decimals, without trailing zeros
pub fn format_units(amount: U256, decimals: u8) -> String {
    match utils::format_units(amount, decimals as u32) {
        Ok(formatted) if formatted.contains('.') => formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string(),
        Ok(formatted) => formatted,
        Err(e) => {
            warn!("Cannot format {} with {} decimals: {}", amount, decimals, e);
            "0".to_string()
        }
    }
}
