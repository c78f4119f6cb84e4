//! Network communication requires `http` crate feature.
//!
//! Expects `LISK_API_URL` (like `http://localhost:7000/api`),
//! `TEST_PASSPHRASE` and `TEST_TO_ADDRESS` in the environment.

use std::{thread, time::Duration};
use lisk_devkit::amount::convert_beddows_to_lsk;
use lisk_devkit::network::{AdapterConfig, LiskAdapter, NetworkError};
use tracing_subscriber::EnvFilter;

async fn create_and_broadcast_transaction() -> Result<(), NetworkError> {
    let adapter = LiskAdapter::load(AdapterConfig::new(
        std::env::var("LISK_API_URL").expect("Node URL must be provided"),
    ))?;
    let passphrase = std::env::var("TEST_PASSPHRASE").expect("Passphrase must be provided");
    let recipient = std::env::var("TEST_TO_ADDRESS").expect("Address must be provided");
    let sender = adapter.get_address_from_passphrase(&passphrase).to_string();
    println!("Sending from {sender} to {recipient}");

    let sender_before = adapter.get_account_balance(&sender).await?;
    println!("Balance before: {sender_before}");

    let transaction = adapter.prepare_transfer("0.1", &recipient, "demo transfer", &passphrase)?;
    adapter.post_transaction(&transaction).await?;
    println!(
        "Posted transaction {:?} moving {} LSK",
        transaction.id,
        convert_beddows_to_lsk(transaction.amount)
    );

    let expected_id = transaction.id.map(|id| id.to_string());
    loop {
        let latest = adapter
            .get_latest_outbound_transactions(&sender, Some(1))
            .await?;
        let included = latest
            .first()
            .and_then(|record| record.get("id"))
            .and_then(|id| id.as_str())
            == expected_id.as_deref();
        if included {
            println!("Transaction included into a block");
            break;
        }
        println!("Transaction not processed yet");
        thread::sleep(Duration::from_secs(2));
    }
    let sender_after = adapter.get_account_balance(&sender).await?;
    println!("Balance after: {sender_after}");
    adapter.unload();
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    create_and_broadcast_transaction()
        .await
        .expect("Must not fail");
}
