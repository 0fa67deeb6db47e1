pub mod api_response;
pub mod balances;
pub mod network_config;
pub mod token;
pub mod transaction;
