//! Lisk transfer transactions support.
use crate::address::{Address, AddressConvertible, AddressValidationError, PrivateKey, PublicKey};
use crate::amount::{AmountError, MAX_TRANSACTION_AMOUNT};
use crate::transaction_builder::TransferBuilder;
use crate::utils::sha256;
use ed25519_dalek::{Signature, Signer, Verifier};
use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, DisplayFromStr};

/// Type identifier of a token transfer.
pub const TRANSFER_TYPE: u8 = 0;
/// Maximal size of the transfer `data` field, in UTF-8 bytes.
pub const MAX_DATA_LENGTH: usize = 64;

/// Transfer payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferAsset {
    /// Arbitrary message attached to the transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// Represents a single Lisk transfer transaction.
///
/// Serializes into the JSON shape accepted by `POST /transactions`
/// of a Lisk node.
#[serde_with::serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction identifier. Set to None before signing.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Transaction type, [`TRANSFER_TYPE`] for transfers.
    #[serde(rename = "type")]
    pub transaction_type: u8,
    /// Amount of Beddows to send.
    #[serde_as(as = "DisplayFromStr")]
    pub amount: u64,
    /// Fee in Beddows.
    #[serde_as(as = "DisplayFromStr")]
    pub fee: u64,
    /// Recipient
    pub recipient_id: Address,
    /// Public key of the signer. Set to None before signing.
    #[serde_as(as = "Option<Hex>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_public_key: Option<[u8; 32]>,
    /// Seconds since the Lisk epoch.
    pub timestamp: i32,
    /// Transfer payload.
    pub asset: TransferAsset,
    /// Signature. Set to None before signing.
    #[serde_as(as = "Option<Hex>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<[u8; 64]>,
    /// Multisignature signatures, always empty for plain transfers.
    #[serde(default)]
    pub signatures: Vec<String>,
}

impl Transaction {
    pub fn transfer() -> TransferBuilder {
        //! Create a transfer builder.
        TransferBuilder::new()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        //! Binary representation of the transaction, including the
        //! signature when present.
        self.encode(true)
    }

    pub fn signing_hash(&self) -> [u8; 32] {
        //! Hash that is signed by the sender (signature excluded).
        sha256(&[self.encode(false)])
    }

    fn encode(&self, with_signature: bool) -> Vec<u8> {
        let data = self.asset.data.as_deref().unwrap_or_default().as_bytes();
        let mut out = Vec::with_capacity(1 + 4 + 32 + 8 + 8 + data.len() + 64);
        out.push(self.transaction_type);
        out.extend_from_slice(&self.timestamp.to_le_bytes());
        if let Some(key) = self.sender_public_key.as_ref() {
            out.extend_from_slice(key);
        }
        out.extend_from_slice(&self.recipient_id.to_be_bytes());
        out.extend_from_slice(&self.amount.to_le_bytes());
        out.extend_from_slice(data);
        if with_signature {
            if let Some(signature) = self.signature.as_ref() {
                out.extend_from_slice(signature);
            }
        }
        out
    }

    pub fn compute_id(&self) -> u64 {
        //! Identifier derived from the full transaction bytes.
        let hash = sha256(&[self.to_bytes()]);
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&hash[..8]);
        u64::from_le_bytes(prefix)
    }

    pub fn validate(&self) -> Result<(), TransactionError> {
        //! Check limits enforced by the network.
        if self.transaction_type != TRANSFER_TYPE {
            return Err(TransactionError::UnsupportedType(self.transaction_type));
        }
        if self.amount > MAX_TRANSACTION_AMOUNT {
            return Err(AmountError::OutOfRange.into());
        }
        let data_length = self.asset.data.as_ref().map_or(0, String::len);
        if data_length > MAX_DATA_LENGTH {
            return Err(TransactionError::DataTooLong(data_length));
        }
        Ok(())
    }

    #[must_use]
    pub fn sign(mut self, private_key: &PrivateKey) -> Self {
        //! Create a copy of transaction with sender key, signature and id set.
        self.sender_public_key = Some(private_key.verifying_key().to_bytes());
        self.signature = None;
        self.signature = Some(private_key.sign(&self.signing_hash()).to_bytes());
        self.id = Some(self.compute_id());
        self
    }

    pub fn sender_public_key(&self) -> Option<PublicKey> {
        //! Parsed sender public key, if present and well-formed.
        self.sender_public_key
            .as_ref()
            .and_then(|key| PublicKey::from_bytes(key).ok())
    }

    pub fn sender_address(&self) -> Option<Address> {
        //! Address of the signer, if the transaction is signed.
        self.sender_public_key().map(|key| key.address())
    }

    pub fn verify_signature(&self) -> bool {
        //! Whether the signature matches the sender key and the content.
        match (self.sender_public_key(), self.signature.as_ref()) {
            (Some(key), Some(signature)) => key
                .verify(&self.signing_hash(), &Signature::from_bytes(signature))
                .is_ok(),
            _ => false,
        }
    }
}

/// Transfer creation errors
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TransactionError {
    /// Amount could not be converted or exceeds the limit.
    #[error(transparent)]
    Amount(#[from] AmountError),
    /// Recipient is not a valid address.
    #[error(transparent)]
    Recipient(#[from] AddressValidationError),
    /// No amount provided
    #[error("Transfer amount must be provided")]
    MissingAmount,
    /// No recipient provided
    #[error("Transfer recipient must be provided")]
    MissingRecipient,
    /// Passphrase is empty.
    #[error("Cannot sign a transaction with an empty passphrase")]
    EmptyPassphrase,
    /// `data` exceeds [`MAX_DATA_LENGTH`].
    #[error("Transaction data field cannot exceed 64 bytes, got {0}")]
    DataTooLong(usize),
    /// Only transfers are supported.
    #[error("Unsupported transaction type {0}")]
    UnsupportedType(u8),
}
