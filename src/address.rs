//! Lisk address operations and verifications.

use crate::utils::sha256;
pub use ed25519_dalek::{SigningKey as PrivateKey, VerifyingKey as PublicKey};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::{fmt, ops::Deref, result::Result, str::FromStr};

/// Lisk address: a decimal `u64` followed by `L`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(SerializeDisplay, DeserializeFromStr)]
pub struct Address(u64);

impl Deref for Address {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl From<u64> for Address {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, Self::SUFFIX)
    }
}
impl FromStr for Address {
    type Err = AddressValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&s.len()) {
            return Err(AddressValidationError::InvalidLength(s.len()));
        }
        let body = s
            .strip_suffix(Self::SUFFIX)
            .ok_or(AddressValidationError::MissingSuffix)?;
        if !body.bytes().all(|c| c.is_ascii_digit()) {
            return Err(AddressValidationError::InvalidCharacter);
        }
        let number: u64 = body
            .parse()
            .map_err(|_| AddressValidationError::OutOfRange)?;
        if number.to_string() != body {
            return Err(AddressValidationError::NonCanonical);
        }
        Ok(Self(number))
    }
}

impl Address {
    /// Trailing marker of every address.
    pub const SUFFIX: char = 'L';
    /// Shortest valid textual form (`0L`).
    pub const MIN_LENGTH: usize = 2;
    /// Longest valid textual form.
    pub const MAX_LENGTH: usize = 22;

    pub const fn to_u64(&self) -> u64 {
        //! Numeric part of the address.
        self.0
    }

    pub const fn to_be_bytes(&self) -> [u8; 8] {
        //! Big-endian bytes as used in transaction payloads.
        self.0.to_be_bytes()
    }
}

/// Address parsing errors.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum AddressValidationError {
    /// Textual form is too short or too long.
    #[error("Address length does not match requirements. Expected between 2 and 22 characters, got {0}.")]
    InvalidLength(usize),
    /// No trailing `L`.
    #[error("Address format does not match requirements. Expected \"L\" at the end.")]
    MissingSuffix,
    /// Something other than decimal digits before the suffix.
    #[error("Address format does not match requirements. Address includes invalid characters.")]
    InvalidCharacter,
    /// Numeric part does not fit into 64 bits.
    #[error("Address format does not match requirements. Address out of maximum range.")]
    OutOfRange,
    /// Leading zeros or other non-canonical number spelling.
    #[error("Address string format does not match it's number representation.")]
    NonCanonical,
}

/// A trait for objects that can generate an on-chain address.
pub trait AddressConvertible {
    /// Create an address
    fn address(&self) -> Address;
}

impl AddressConvertible for PublicKey {
    fn address(&self) -> Address {
        //! Generate address from public key.
        // First 8 bytes of the hash, read in reversed order.
        let hash = sha256(&[self.as_bytes()]);
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&hash[..8]);
        Address(u64::from_le_bytes(prefix))
    }
}

impl AddressConvertible for PrivateKey {
    fn address(&self) -> Address {
        self.verifying_key().address()
    }
}
