#![doc(html_root_url = "https://docs.rs/lisk-devkit/0.1.0")]
#![warn(rust_2018_idioms, missing_docs)]
#![deny(dead_code, unused_imports, unused_mut)]

//! Rust library to aid coding with Lisk: wallets, transfer signing,
//! and thin adapters over the node and Lisk Service HTTP APIs.
//!
//! This library acts primary as a proxy to several underlying libraries
//! (`ed25519-dalek`, `sha2`, `tiny-bip39`, `rust_decimal`, `reqwest`),
//! with the addition of some Lisk-specific glue: the address format,
//! the transfer byte layout and the LSK/Beddows conversion.
//!
//! ## Usage
//!
//! One of possible use cases can be transfer creation and signing.
//!
//! Here is how you may approach it. Let's transfer a few LSK to another account.
//!
//! ```rust
//! use lisk_devkit::passphrase::{get_address_from_passphrase, Wallet};
//! use lisk_devkit::transactions::Transaction;
//!
//! let wallet = Wallet::generate();
//! let transaction = Transaction::transfer()
//!     .amount_lsk("1.5")
//!     .recipient("18160565574430594874L")
//!     .data("for the coffee")
//!     .sign(&wallet.passphrase)
//!     .expect("Valid transfer");
//! assert_eq!(transaction.amount, 150_000_000);
//! assert_eq!(transaction.sender_address(), Some(get_address_from_passphrase(&wallet.passphrase)));
//! assert!(transaction.verify_signature());
//! println!("{}", serde_json::to_string(&transaction).unwrap());
//! ```
//!
//! With the `http` feature (on by default), [`network::LiskAdapter`] posts
//! such transactions to a node and reads balances back, while
//! [`service::LiskServiceRepository`] queries the Lisk Service indexer.
//!
//! ## Examples
//!
//! Runnable samples live in the `demos/` folder and are registered as
//! cargo examples (`cargo run --example create_wallet`).

mod address;
pub use address::{Address, AddressConvertible, AddressValidationError, PrivateKey, PublicKey};
pub mod amount;
#[cfg(feature = "http")]
pub mod meta;
#[cfg(feature = "http")]
pub mod network;
pub mod passphrase;
#[cfg(feature = "http")]
pub mod service;
mod transaction_builder;
pub use transaction_builder::TransferBuilder;
pub mod transactions;
mod utils;
pub use utils::{sha256, time_from_epoch, time_with_offset, EPOCH_UNIX_SECONDS};
