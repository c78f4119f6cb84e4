//! Paths and query parameter names of the Lisk Service API.

/// Token transfer identifier in `module:asset` numeric form.
pub const TOKEN_TRANSFER_ASSET_ID: &str = "2:0";
/// Token transfer identifier in `module:asset` named form.
pub const TOKEN_TRANSFER_ASSET_NAME: &str = "token:transfer";

/// Resources exposed by the service.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Resource {
    /// Account records.
    Accounts,
    /// Transaction records.
    Transactions,
}

impl Resource {
    /// Path relative to the service base URL.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Accounts => "/api/v2/accounts",
            Self::Transactions => "/api/v2/transactions",
        }
    }
}

/// Filters accepted by [`Resource::Accounts`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AccountFilter {
    /// Account address.
    Address,
}

impl AccountFilter {
    /// Query parameter name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Address => "address",
        }
    }
}

/// Filters accepted by [`Resource::Transactions`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TransactionFilter {
    /// Sender address.
    SenderAddress,
    /// Page size.
    Limit,
    /// Numeric `module:asset` type.
    ModuleAssetId,
    /// Named `module:asset` type.
    ModuleAssetName,
    /// Ordering, see [`TransactionSort`].
    Sort,
}

impl TransactionFilter {
    /// Query parameter name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SenderAddress => "senderAddress",
            Self::Limit => "limit",
            Self::ModuleAssetId => "moduleAssetId",
            Self::ModuleAssetName => "moduleAssetName",
            Self::Sort => "sort",
        }
    }
}

/// Orderings of [`Resource::Transactions`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TransactionSort {
    /// Newest first.
    TimestampDesc,
}

impl TransactionSort {
    /// Value of the `sort` parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TimestampDesc => "timestamp:desc",        }
    }
}
