use std::fmt::Display;

use crate::address::Address;
use crate::amount::{convert_lsk_to_beddows, TRANSFER_FEE};
use crate::passphrase::KeyPair;
use crate::transactions::{Transaction, TransactionError, TransferAsset, TRANSFER_TYPE};
use crate::utils::time_with_offset;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Amount {
    Beddows(u64),
    Lsk(String),
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
struct TransferTemplate {
    amount: Option<Amount>,
    recipient: Option<String>,
    data: Option<String>,
    fee: Option<u64>,
    timestamp: Option<i32>,
    time_offset: Option<i64>,
}

/// Transfer builder allows to create and sign transfers
/// with minimal developers efforts.
///
/// Amount and recipient are validated when the transaction is built,
/// so the setters never fail.
#[derive(Clone, Debug, Default)]
pub struct TransferBuilder {
    template: TransferTemplate,
}

impl TransferBuilder {
    #[must_use]
    pub fn new() -> Self {
        //! Create a new builder.
        Self::default()
    }
    #[must_use]
    pub fn amount(mut self, beddows: u64) -> Self {
        //! Set the amount in Beddows.
        self.template.amount = Some(Amount::Beddows(beddows));
        self
    }
    #[must_use]
    pub fn amount_lsk<T: Display>(mut self, lsk: T) -> Self {
        //! Set a human-readable amount in LSK, like `10` or `"0.5"`.
        self.template.amount = Some(Amount::Lsk(lsk.to_string()));
        self
    }
    #[must_use]
    pub fn recipient<T: Display>(mut self, recipient: T) -> Self {
        //! Set the recipient address (`Address` or its textual form).
        self.template.recipient = Some(recipient.to_string());
        self
    }
    #[must_use]
    pub fn data(mut self, data: impl Into<String>) -> Self {
        //! Attach a message. An empty message is the same as none.
        let data = data.into();
        self.template.data = (!data.is_empty()).then_some(data);
        self
    }
    #[must_use]
    pub const fn fee(mut self, fee: u64) -> Self {
        //! Override the fee (Beddows).
        self.template.fee = Some(fee);
        self
    }
    #[must_use]
    pub const fn timestamp(mut self, timestamp: i32) -> Self {
        //! Set an explicit timestamp (seconds since the Lisk epoch).
        self.template.timestamp = Some(timestamp);
        self
    }
    #[must_use]
    pub const fn time_offset(mut self, offset_seconds: i64) -> Self {
        //! Shift the current time by `offset_seconds` when no explicit
        //! timestamp is given.
        self.template.time_offset = Some(offset_seconds);
        self
    }

    pub fn build(&self) -> Result<Transaction, TransactionError> {
        //! Prepare an unsigned `Transaction`.
        let amount = match self.template.amount.as_ref() {
            Some(Amount::Beddows(beddows)) => *beddows,
            Some(Amount::Lsk(lsk)) => convert_lsk_to_beddows(lsk)?,
            None => return Err(TransactionError::MissingAmount),
        };
        let recipient_id: Address = self
            .template
            .recipient
            .as_deref()
            .ok_or(TransactionError::MissingRecipient)?
            .parse()?;
        let tx = Transaction {
            id: None,
            transaction_type: TRANSFER_TYPE,
            amount,
            fee: self.template.fee.unwrap_or(TRANSFER_FEE),
            recipient_id,
            sender_public_key: None,
            timestamp: self
                .template
                .timestamp
                .unwrap_or_else(|| time_with_offset(self.template.time_offset.unwrap_or(0))),
            asset: TransferAsset {
                data: self.template.data.clone(),
            },
            signature: None,
            signatures: vec![],
        };
        tx.validate()?;
        Ok(tx)
    }

    pub fn sign(&self, passphrase: &str) -> Result<Transaction, TransactionError> {
        //! Prepare a `Transaction` signed with the keypair of `passphrase`.
        if passphrase.is_empty() {
            return Err(TransactionError::EmptyPassphrase);
        }
        let keys = KeyPair::from_passphrase(passphrase);
        Ok(self.build()?.sign(keys.private_key()))
    }
}
