use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Page returned by `GET /addresses/{addr}/token-transfers`.
#[derive(Debug, Deserialize)]
pub struct TokenTransfersPage {
    #[serde(default)]
    pub items: Vec<RawTokenTransfer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTokenTransfer {
    #[serde(alias = "transaction_hash")]
    pub tx_hash: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub hash: String,
    pub timestamp: DateTime<Utc>,
    pub provider: TransactionProvider,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionProvider {
    pub id: String,
    pub provider_id: String,
}

impl TransactionProvider {
    pub fn ethereum() -> Self {
        Self {
            id: "ethereum".to_string(),
            provider_id: "ethereum".to_string(),
        }
    }
}

impl From<RawTokenTransfer> for TransactionRecord {
    fn from(transfer: RawTokenTransfer) -> Self {
        Self {
            id: transfer.tx_hash.clone(),
            hash: transfer.tx_hash,
            timestamp: transfer.timestamp,
            provider: TransactionProvider::ethereum(),
        }
    }
}
