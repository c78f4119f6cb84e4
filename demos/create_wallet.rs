use lisk_devkit::passphrase::{validate_mnemonic, KeyPair, Wallet};
use lisk_devkit::AddressConvertible;

fn create_wallet() {
    let wallet = Wallet::generate();
    println!("Mnemonic text: {}", wallet.passphrase);
    assert!(validate_mnemonic(&wallet.passphrase));

    let keys = KeyPair::from_passphrase(&wallet.passphrase);
    println!("Public key: {}", hex::encode(keys.public_key().as_bytes()));
    println!("Address: {}", keys.address());
    assert_eq!(keys.address(), wallet.address);
}

#[test]
fn test_run() {
    create_wallet();
}

fn main() {
    create_wallet();
}
