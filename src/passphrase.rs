//! Passphrases (BIP39 mnemonics) and keypairs derived from them.
//!
//! Lisk derives an ed25519 keypair directly from a passphrase: the
//! secret seed is SHA-256 of the passphrase text. There is no hierarchical
//! derivation, so the same phrase always maps to exactly one address.

use crate::address::{Address, AddressConvertible, PrivateKey, PublicKey};
use crate::utils::sha256;
pub use bip39::{Language, Mnemonic, MnemonicType};
use serde::Serialize;
use std::fmt;

pub fn generate_mnemonic() -> String {
    //! Generate a new random 12-word English mnemonic.
    Mnemonic::new(MnemonicType::Words12, Language::English).into_phrase()
}

pub fn validate_mnemonic(passphrase: &str) -> bool {
    //! Whether the phrase is a structurally valid English mnemonic
    //! (known words, correct length and checksum).
    Mnemonic::validate(passphrase, Language::English).is_ok()
}

pub fn get_address_from_passphrase(passphrase: &str) -> Address {
    //! Derive the address controlled by `passphrase`.
    KeyPair::from_passphrase(passphrase).address()
}

/// Ed25519 keypair derived from a passphrase.
#[derive(Clone)]
pub struct KeyPair(PrivateKey);

impl KeyPair {
    pub fn from_passphrase(passphrase: &str) -> Self {
        //! Derive a keypair. Any text is accepted, mnemonic or not.
        Self(PrivateKey::from_bytes(&sha256(&[passphrase.as_bytes()])))
    }

    pub fn public_key(&self) -> PublicKey {
        //! Get underlying public key.
        self.0.verifying_key()
    }

    pub const fn private_key(&self) -> &PrivateKey {
        //! Get underlying signing key.
        &self.0
    }
}

impl AddressConvertible for KeyPair {
    fn address(&self) -> Address {
        self.public_key().address()
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &hex::encode(self.public_key().as_bytes()))
            .finish_non_exhaustive()
    }
}

/// Freshly generated wallet.
///
/// The passphrase is the only way to recover the funds: it is never
/// stored or logged by this crate, persisting it is up to the caller.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Wallet {
    /// Address controlled by the passphrase.
    #[serde(rename = "walletAddress")]
    pub address: Address,
    /// Recovery phrase.
    pub passphrase: String,
}

impl Wallet {
    pub fn generate() -> Self {
        //! Create a wallet from a new random mnemonic.
        let passphrase = generate_mnemonic();
        Self {
            address: get_address_from_passphrase(&passphrase),
            passphrase,
        }
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &format_args!("{}", self.address))
            .field("passphrase", &"<redacted>")
            .finish()
    }
}
