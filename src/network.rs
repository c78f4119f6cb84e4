//! Module for interacting with Lisk node HTTP APIs.
//!
//! [`LiskAdapter`] bundles wallet primitives (generation, validation,
//! address derivation, transfer signing) with a small REST client for
//! a single node.

use crate::address::Address;
use crate::passphrase::{self, Wallet};
use crate::transactions::{Transaction, TransactionError};
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::time::Duration;
use tracing::{debug, warn};

/// Page size used when neither the caller nor the configuration sets one.
pub const DEFAULT_API_MAX_PAGE_SIZE: u32 = 100;
/// Request timeout (milliseconds) used when the configuration sets none.
pub const DEFAULT_API_TIMEOUT: u64 = 10_000;

/// Transaction record as returned by the node, kept opaque.
pub type TransactionRecord = serde_json::Value;

/// Result of all asynchronous calls in this module.
pub type NetworkResult<T> = std::result::Result<T, NetworkError>;

/// Node adapter errors.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum NetworkError {
    /// Connection failure, timeout, non-2xx status or undecodable body.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// Balance lookup returned no records.
    #[error("Failed to fetch account balance for wallet address {0} - Could not find any balance records for that account")]
    AccountNotFound(String),
    /// Transfer could not be prepared.
    #[error(transparent)]
    Transaction(#[from] TransactionError),
}

/// Node adapter configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdapterConfig {
    /// API base url, without trailing slash (e.g. `http://localhost:7000/api`).
    #[serde(rename = "apiURL")]
    pub api_url: String,
    /// Page size for listings when the caller gives no limit.
    pub api_max_page_size: u32,
    /// Request timeout in milliseconds.
    pub api_timeout: u64,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            api_max_page_size: DEFAULT_API_MAX_PAGE_SIZE,
            api_timeout: DEFAULT_API_TIMEOUT,
        }
    }
}

impl AdapterConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        //! Configuration with default page size and timeout.
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }
    #[must_use]
    pub const fn with_max_page_size(mut self, api_max_page_size: u32) -> Self {
        //! Set page size for listings.
        self.api_max_page_size = api_max_page_size;
        self
    }
    #[must_use]
    pub const fn with_timeout(mut self, api_timeout: u64) -> Self {
        //! Set request timeout in milliseconds.
        self.api_timeout = api_timeout;
        self
    }

    fn or_defaults(mut self) -> Self {
        if self.api_max_page_size == 0 {
            self.api_max_page_size = DEFAULT_API_MAX_PAGE_SIZE;
        }
        if self.api_timeout == 0 {
            self.api_timeout = DEFAULT_API_TIMEOUT;
        }
        self
    }
}

/// Single account balance record.
///
/// Only `balance` is required. Nodes that report it as a JSON number
/// are accepted as well.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    /// Account address, empty when the node omits it.
    #[serde(default)]
    pub address: String,
    /// Balance in Beddows, as a decimal string.
    #[serde(deserialize_with = "balance_from_text_or_number")]
    pub balance: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BalanceValue {
    Text(String),
    Number(serde_json::Number),
}

fn balance_from_text_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    Ok(match BalanceValue::deserialize(deserializer)? {
        BalanceValue::Text(text) => text,
        BalanceValue::Number(number) => number.to_string(),
    })
}

/// Known shapes of the `/accounts` response across node API versions.
#[derive(Deserialize)]
#[serde(untagged)]
enum AccountsEnvelope {
    Bare(Vec<AccountBalance>),
    Wrapped { data: Vec<AccountBalance> },
}

impl AccountsEnvelope {
    fn into_records(self) -> Vec<AccountBalance> {
        match self {
            Self::Bare(records) | Self::Wrapped { data: records } => records,
        }
    }
}

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// A simple HTTP REST client for a Lisk node, together with wallet helpers.
#[derive(Clone, Debug)]
pub struct LiskAdapter {
    config: AdapterConfig,
    client: Client,
}

impl LiskAdapter {
    pub fn load(config: AdapterConfig) -> NetworkResult<Self> {
        //! Store configuration and prepare the HTTP client shared by all calls.
        //!
        //! Zero page size or timeout fall back to defaults. The URL is not
        //! validated here: a malformed one fails on the first request.
        let config = config.or_defaults();
        let client = Client::builder()
            .timeout(Duration::from_millis(config.api_timeout))
            .build()?;
        debug!(
            api_url = %config.api_url,
            api_max_page_size = config.api_max_page_size,
            api_timeout = config.api_timeout,
            "Lisk adapter loaded"
        );
        Ok(Self { config, client })
    }

    pub const fn config(&self) -> &AdapterConfig {
        //! Configuration this adapter was loaded with.
        &self.config
    }

    pub fn prepare_transfer<A: Display>(
        &self,
        amount: A,
        recipient_address: &str,
        message: &str,
        passphrase: &str,
    ) -> Result<Transaction, TransactionError> {
        //! Build and sign a transfer of `amount` LSK. The transaction is
        //! not submitted, see [`LiskAdapter::post_transaction`].
        Transaction::transfer()
            .amount_lsk(amount)
            .recipient(recipient_address)
            .data(message)
            .sign(passphrase)
    }

    pub fn generate_wallet(&self) -> Wallet {
        //! Generate a new random wallet.
        //!
        //! The caller is responsible for persisting the passphrase.
        Wallet::generate()
    }

    pub fn validate_passphrase(&self, passphrase: &str) -> bool {
        //! Whether `passphrase` is a valid English mnemonic.
        passphrase::validate_mnemonic(passphrase)
    }

    pub fn get_address_from_passphrase(&self, passphrase: &str) -> Address {
        //! Derive the address controlled by `passphrase`.
        passphrase::get_address_from_passphrase(passphrase)
    }

    pub async fn post_transaction(&self, transaction: &Transaction) -> NetworkResult<()> {
        //! Broadcast a prepared [`Transaction`] to the node.
        let url = format!("{}/transactions", self.config.api_url);
        debug!(%url, id = ?transaction.id, "Posting transaction");
        self.client
            .post(&url)
            .json(transaction)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn get_latest_outbound_transactions(
        &self,
        wallet_address: &str,
        limit: Option<u32>,
    ) -> NetworkResult<Vec<TransactionRecord>> {
        //! Retrieve transactions sent from `wallet_address`, newest first.
        //!
        //! Without `limit` (or with zero) the configured max page size is used.
        let limit = limit
            .filter(|&l| l > 0)
            .unwrap_or(self.config.api_max_page_size)
            .to_string();
        let url = format!("{}/transactions", self.config.api_url);
        debug!(%url, sender = wallet_address, %limit, "Fetching outbound transactions");
        let response = self
            .client
            .get(&url)
            .query(&[
                ("senderId", wallet_address),
                ("limit", limit.as_str()),
                ("sort", "timestamp:desc"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<DataEnvelope<Vec<TransactionRecord>>>()
            .await?;
        Ok(response.data)
    }

    pub async fn get_account_balance(&self, wallet_address: &str) -> NetworkResult<String> {
        //! Retrieve account balance (Beddows, decimal string).
        //!
        //! If the node returns several records, the first one wins.
        let url = format!("{}/accounts", self.config.api_url);
        debug!(%url, address = wallet_address, "Fetching account balance");
        let records = self
            .client
            .get(&url)
            .query(&[("address", wallet_address)])
            .send()
            .await?
            .error_for_status()?
            .json::<AccountsEnvelope>()
            .await?
            .into_records();
        match records.into_iter().next() {
            Some(record) => Ok(record.balance),
            None => {
                warn!(address = wallet_address, "No balance records found");
                Err(NetworkError::AccountNotFound(wallet_address.to_string()))
            }
        }
    }

    pub fn unload(self) {
        //! Release the adapter. Nothing to clean up besides dropping it.
        debug!(api_url = %self.config.api_url, "Lisk adapter unloaded");
    }
}
