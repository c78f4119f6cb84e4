//! Repository over the Lisk Service API, an indexer that sits next to
//! the nodes and answers filtered historical queries.

use crate::meta::{
    AccountFilter, Resource, TransactionFilter, TransactionSort, TOKEN_TRANSFER_ASSET_ID,
    TOKEN_TRANSFER_ASSET_NAME,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::DefaultOnNull;
use std::time::Duration;
use tracing::debug;

/// Service URL used for [`Environment::Test`].
pub const DEFAULT_TESTNET_URL: &str = "https://testnet-service.lisk.com";
/// Service URL used for [`Environment::Main`].
pub const DEFAULT_MAINNET_URL: &str = "https://service.lisk.com";

/// Record returned by the service (account or transaction), kept opaque.
pub type Record = Value;

/// Result of all asynchronous calls in this module.
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Service repository errors.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ServiceError {
    /// Connection failure, timeout, non-2xx status or undecodable body.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Network the service belongs to.
///
/// Only `"test"` selects the testnet, any other name means mainnet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Environment {
    /// Test network.
    Test,
    /// Main network.
    #[default]
    Main,
}

impl From<&str> for Environment {
    fn from(name: &str) -> Self {
        if name == "test" {
            Self::Test
        } else {
            Self::Main
        }
    }
}
impl From<String> for Environment {
    fn from(name: String) -> Self {
        name.as_str().into()
    }
}

impl Environment {
    /// Default service URL of this network.
    pub const fn default_url(self) -> &'static str {
        match self {
            Self::Test => DEFAULT_TESTNET_URL,
            Self::Main => DEFAULT_MAINNET_URL,
        }
    }
}

/// Service repository configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceConfig {
    /// Network, picks the default URL.
    pub env: Environment,
    /// Explicit base url, overrides the network default.
    #[serde(rename = "apiURL")]
    pub api_url: Option<String>,
    /// Request timeout in milliseconds, none by default.
    pub api_timeout: Option<u64>,
}

impl ServiceConfig {
    pub fn new(env: impl Into<Environment>) -> Self {
        //! Configuration for the given network with its default URL.
        Self {
            env: env.into(),
            ..Self::default()
        }
    }
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        //! Override the base url.
        self.api_url = Some(api_url.into());
        self
    }
    #[must_use]
    pub const fn with_timeout(mut self, api_timeout: u64) -> Self {
        //! Set request timeout in milliseconds.
        self.api_timeout = Some(api_timeout);
        self
    }
}

/// Envelope of every service listing.
#[serde_with::serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse {
    /// Matching records, empty when `data` is missing or null.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub data: Vec<Record>,
    /// Paging details.
    #[serde(default)]
    pub meta: Value,
}

/// Lisk Service client.
#[derive(Clone, Debug)]
pub struct LiskServiceRepository {
    api_url: String,
    client: Client,
}

impl LiskServiceRepository {
    pub fn new(config: ServiceConfig) -> ServiceResult<Self> {
        //! Create a repository. The HTTP client is shared by all calls.
        let api_url = config
            .api_url
            .unwrap_or_else(|| config.env.default_url().to_string());
        let mut builder = Client::builder();
        if let Some(timeout) = config.api_timeout {
            builder = builder.timeout(Duration::from_millis(timeout));
        }
        debug!(%api_url, env = ?config.env, "Lisk service repository created");
        Ok(Self {
            api_url,
            client: builder.build()?,
        })
    }

    pub fn api_url(&self) -> &str {
        //! Base url requests go to.
        &self.api_url
    }

    pub async fn get<T, P>(&self, path: &str, params: &P) -> ServiceResult<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        //! Fetch `{api_url}{path}` with the given query parameters and
        //! decode the whole body.
        let url = format!("{}{}", self.api_url, path);
        debug!(%url, "Querying Lisk service");
        Ok(self
            .client
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?)
    }

    pub async fn get_accounts<P: Serialize + ?Sized>(
        &self,
        filter_params: &P,
    ) -> ServiceResult<Vec<Record>> {
        //! Account records matching the filter.
        let response: ServiceResponse = self.get(Resource::Accounts.path(), filter_params).await?;
        Ok(response.data)
    }

    pub async fn get_transactions<P: Serialize + ?Sized>(
        &self,
        filter_params: &P,
    ) -> ServiceResult<Vec<Record>> {
        //! Transaction records matching the filter.
        let response: ServiceResponse = self
            .get(Resource::Transactions.path(), filter_params)
            .await?;
        Ok(response.data)
    }

    pub async fn get_account_by_address(&self, wallet_address: &str) -> ServiceResult<Option<Record>> {
        //! First account with the given address, if any.
        let accounts = self
            .get_accounts(&[(AccountFilter::Address.as_str(), wallet_address)])
            .await?;
        Ok(accounts.into_iter().next())
    }

    pub async fn get_outbound_transactions(
        &self,
        sender_address: &str,
        limit: Option<u32>,
    ) -> ServiceResult<Vec<Record>> {
        //! Token transfers sent from `sender_address`, newest first.
        //!
        //! Without `limit` the service default page size applies.
        let mut params = vec![(
            TransactionFilter::SenderAddress.as_str(),
            sender_address.to_string(),
        )];
        if let Some(limit) = limit {
            params.push((TransactionFilter::Limit.as_str(), limit.to_string()));
        }
        params.extend([
            (
                TransactionFilter::ModuleAssetId.as_str(),
                TOKEN_TRANSFER_ASSET_ID.to_string(),
            ),
            (
                TransactionFilter::ModuleAssetName.as_str(),
                TOKEN_TRANSFER_ASSET_NAME.to_string(),
            ),
            (
                TransactionFilter::Sort.as_str(),
                TransactionSort::TimestampDesc.as_str().to_string(),
            ),
        ]);
        self.get_transactions(&params).await
    }
}
