use crate::{errors::CustomError, models::network_config::NetworkConfig};

const NEXIS_NATIVE_LOGO: &str =
    "https://raw.githubusercontent.com/Nexis-Network/Nexis-Brand-Kit/main/Mask%20group%20(1).png";
const NEXIS_TOKEN_LOGO: &str =
    "https://raw.githubusercontent.com/Nexis-Network/Nexis-Brand-Kit/main/NZT%20token%20logo%20light.png";

pub const DEFAULT_CHAIN_ID: u64 = 2370;

/// Get network configuration based on chain ID
pub fn get_network_config(chain_id: u64) -> Result<NetworkConfig, CustomError> {
    match chain_id {
        2370 => Ok(NetworkConfig {
            chain_id: 2370,
            name: "Nexis EVM Testnet".to_string(),
            explorer_api_url: "https://evm-testnet.nexscan.io/api/v2".to_string(),
            block_explorer: "https://evm-testnet.nexscan.io".to_string(),
            native_name: "Nexis".to_string(),
            symbol: "NZT".to_string(),
            native_decimals: 18,
            native_logo: NEXIS_NATIVE_LOGO.to_string(),
            token_logo: NEXIS_TOKEN_LOGO.to_string(),
        }),
        // Add more networks as needed
        _ => Err(CustomError::UnsupportedChainError(chain_id)),
    }
}
