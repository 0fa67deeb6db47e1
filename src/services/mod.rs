pub mod aggregate;
pub mod balance_service;
pub mod balance_store;
pub mod detail_resolver;
pub mod explorer_client;
pub mod hidden_filter;
pub mod network_config;
pub mod normalizer;
