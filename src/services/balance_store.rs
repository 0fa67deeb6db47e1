use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use log::{debug, warn};
use tokio::sync::RwLock;

use crate::{
    errors::CustomError,
    models::token::{AddressInfo, RawTokenRecord},
};

use super::explorer_client::BalanceSource;

pub const DEFAULT_MAX_ACCOUNTS: usize = 10_000;

/// Last known raw balances of one account.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountSnapshot {
    pub token_balances: Vec<RawTokenRecord>,
    pub coin: AddressInfo,
}

#[derive(Default)]
struct AccountEntry {
    generation: u64,
    in_flight: usize,
    last_used: u64,
    snapshot: AccountSnapshot,
}

/// Keeps the latest raw balances per account. A failed read leaves the
/// previous value in place, and results of a refresh that has since been
/// superseded are dropped.
///
/// Accounts that never produced a balance are forgotten once idle, and at
/// most `max_accounts` idle accounts are kept, least recently refreshed
/// first out.
pub struct BalanceStore {
    source: Arc<dyn BalanceSource>,
    max_accounts: usize,
    clock: AtomicU64,
    accounts: RwLock<HashMap<String, AccountEntry>>,
}

impl BalanceStore {
    pub fn new(source: Arc<dyn BalanceSource>, max_accounts: usize) -> Self {
        Self {
            source,
            max_accounts,
            clock: AtomicU64::new(0),
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// Fetches token and coin balances concurrently and returns the account's
    /// snapshot once the results have been applied.
    pub async fn refresh(&self, address: &str) -> AccountSnapshot {
        let key = address.to_lowercase();
        let generation = self.begin(&key).await;

        let (token_balances, coin) = tokio::join!(
            self.source.fetch_token_balances(address),
            self.source.fetch_coin_balance(address)
        );

        self.apply(&key, generation, token_balances, coin).await
    }

    async fn begin(&self, key: &str) -> u64 {
        let mut accounts = self.accounts.write().await;
        if !accounts.contains_key(key) && accounts.len() >= self.max_accounts {
            evict_least_recent(&mut accounts);
        }

        let entry = accounts.entry(key.to_string()).or_default();
        entry.generation += 1;
        entry.in_flight += 1;
        entry.last_used = self.clock.fetch_add(1, Ordering::Relaxed);
        entry.generation
    }

    async fn apply(
        &self,
        key: &str,
        generation: u64,
        token_balances: Result<Vec<RawTokenRecord>, CustomError>,
        coin: Result<AddressInfo, CustomError>,
    ) -> AccountSnapshot {
        let mut accounts = self.accounts.write().await;
        let entry = accounts.entry(key.to_string()).or_default();
        entry.in_flight = entry.in_flight.saturating_sub(1);

        if entry.generation != generation {
            debug!(
                "Discarding balances for {} from refresh {}, current is {}",
                key, generation, entry.generation
            );
        } else {
            match token_balances {
                Ok(token_balances) => entry.snapshot.token_balances = token_balances,
                Err(e) => warn!("Error fetching token balances for {}: {}", key, e),
            }
            match coin {
                Ok(coin) => entry.snapshot.coin = coin,
                Err(e) => warn!("Error fetching coin balance for {}: {}", key, e),
            }
        }

        let snapshot = entry.snapshot.clone();
        if entry.in_flight == 0 && snapshot == AccountSnapshot::default() {
            accounts.remove(key);
        }
        snapshot
    }
}

/// Drops the idle account refreshed longest ago. Accounts with a refresh in
/// flight are never evicted, so the map can briefly exceed its capacity.
fn evict_least_recent(accounts: &mut HashMap<String, AccountEntry>) {
    let oldest = accounts
        .iter()
        .filter(|(_, entry)| entry.in_flight == 0)
        .min_by_key(|(_, entry)| entry.last_used)
        .map(|(key, _)| key.clone());

    if let Some(key) = oldest {
        debug!("Evicting cached balances for {}", key);
        accounts.remove(&key);
    }
}
