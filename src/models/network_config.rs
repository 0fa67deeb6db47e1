use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub chain_id: u64,
    pub name: String,
    /// Base of the Blockscout v2 REST API, without a trailing slash.
    pub explorer_api_url: String,
    pub block_explorer: String,
    pub native_name: String,
    pub symbol: String,
    pub native_decimals: u8,
    pub native_logo: String,
    pub token_logo: String,
}
