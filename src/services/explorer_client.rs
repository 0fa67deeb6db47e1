use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    errors::CustomError,
    models::{
        token::{AddressInfo, RawTokenRecord, ERC20_TOKEN_TYPE},
        transaction::{RawTokenTransfer, TokenTransfersPage},
    },
};

/// Where balances and transfer history for an account come from.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BalanceSource: Send + Sync {
    /// Raw token balances held by `address`, all token types included.
    async fn fetch_token_balances(&self, address: &str)
        -> Result<Vec<RawTokenRecord>, CustomError>;

    /// Native coin balance of `address` in base units.
    async fn fetch_coin_balance(&self, address: &str) -> Result<AddressInfo, CustomError>;

    /// ERC-20 transfers of `token_address` sent to or from `address`.
    async fn fetch_token_transfers(
        &self,
        address: &str,
        token_address: &str,
    ) -> Result<Vec<RawTokenTransfer>, CustomError>;
}

/// Blockscout v2 REST client.
#[derive(Clone, Debug)]
pub struct ExplorerClient {
    client: Client,
    base_url: String,
}

impl ExplorerClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CustomError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CustomError::ConfigError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, &str)],
    ) -> Result<T, CustomError> {
        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CustomError::HttpStatusError {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CustomError::DecodeError(e.to_string()))
    }
}

#[async_trait]
impl BalanceSource for ExplorerClient {
    async fn fetch_token_balances(
        &self,
        address: &str,
    ) -> Result<Vec<RawTokenRecord>, CustomError> {
        let url = self.url(&format!("/addresses/{}/token-balances", address));
        self.get_json(url, &[]).await
    }

    async fn fetch_coin_balance(&self, address: &str) -> Result<AddressInfo, CustomError> {
        let url = self.url(&format!("/addresses/{}", address));
        self.get_json(url, &[]).await
    }

    async fn fetch_token_transfers(
        &self,
        address: &str,
        token_address: &str,
    ) -> Result<Vec<RawTokenTransfer>, CustomError> {
        let url = self.url(&format!("/addresses/{}/token-transfers", address));
        let page: TokenTransfersPage = self
            .get_json(
                url,
                &[
                    ("type", ERC20_TOKEN_TYPE),
                    ("filter", "to | from"),
                    ("token", token_address),
                ],
            )
            .await?;

        Ok(page.items)
    }
}
