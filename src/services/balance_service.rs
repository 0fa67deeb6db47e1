use std::{str::FromStr, sync::Arc};

use ethers::types::Address;
use log::{info, warn};

use crate::{
    errors::CustomError,
    models::{
        balances::{BalanceDetails, BalanceList},
        network_config::NetworkConfig,
    },
};

use super::{
    aggregate::aggregate,
    balance_store::BalanceStore,
    detail_resolver::{resolve, to_transactions, BalanceKey},
    explorer_client::BalanceSource,
    hidden_filter::HiddenTokens,
    normalizer::{native_balance, normalize_account, normalize_token_balances, LabelStyle},
};

pub struct BalanceService {
    source: Arc<dyn BalanceSource>,
    store: BalanceStore,
    network: NetworkConfig,
}

impl BalanceService {
    pub fn new(
        source: Arc<dyn BalanceSource>,
        network: NetworkConfig,
        max_accounts: usize,
    ) -> Self {
        Self {
            store: BalanceStore::new(source.clone(), max_accounts),
            source,
            network,
        }
    }

    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    /// Visible balances of `address` with their aggregate, native coin last.
    pub async fn list_balances(
        &self,
        address: &str,
        hidden: &HiddenTokens,
    ) -> Result<BalanceList, CustomError> {
        validate_address(address)?;

        let snapshot = self.store.refresh(address).await;
        let tokens = normalize_token_balances(
            &snapshot.token_balances,
            LabelStyle::Composed,
            &self.network,
        );

        let (mut balances, summary) = aggregate(tokens, hidden);
        balances.push(native_balance(&snapshot.coin, &self.network));

        Ok(BalanceList {
            aggregate: summary,
            balances,
        })
    }

    /// Resolves `key` against the account's balances and loads its transfers.
    pub async fn balance_details(
        &self,
        address: &str,
        key: &BalanceKey,
    ) -> Result<BalanceDetails, CustomError> {
        validate_address(address)?;

        let snapshot = self.store.refresh(address).await;
        let balances = normalize_account(
            &snapshot.token_balances,
            &snapshot.coin,
            LabelStyle::Plain,
            &self.network,
        );

        let token = resolve(&balances, key)
            .cloned()
            .ok_or_else(|| CustomError::UnknownTokenError(key.name.clone()))?;

        let transactions = match self
            .source
            .fetch_token_transfers(address, &token.address)
            .await
        {
            Ok(transfers) => to_transactions(transfers),
            Err(e) => {
                warn!(
                    "Error fetching transfers of {} for {}: {}",
                    token.address, address, e
                );
                Vec::new()
            }
        };

        info!(
            "Resolved {} ({}) for {} with {} transfers",
            key.name,
            token.address,
            address,
            transactions.len()
        );

        Ok(BalanceDetails {
            token,
            transactions,
        })
    }
}

/// Accepts `0x` followed by 40 hex digits.
pub fn validate_address(address: &str) -> Result<(), CustomError> {
    let invalid = || CustomError::InvalidAddressError(address.to_string());

    // `Address::from_str` also accepts unprefixed hex.
    if !address.starts_with("0x") {
        return Err(invalid());
    }
    Address::from_str(address).map(|_| ()).map_err(|_| invalid())
}
