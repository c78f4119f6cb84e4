use lisk_devkit::amount::TRANSFER_FEE;
use lisk_devkit::passphrase::KeyPair;
use lisk_devkit::transactions::*;
use lisk_devkit::AddressConvertible;

fn decode_hex(hex: &str) -> Vec<u8> {
    hex::decode(hex).unwrap()
}

fn unsigned_transfer() -> Transaction {
    Transaction {
        id: None,
        transaction_type: TRANSFER_TYPE,
        amount: 1_000_000_000,
        fee: TRANSFER_FEE,
        recipient_id: "10881167371402274308L".parse().unwrap(),
        sender_public_key: None,
        timestamp: 100,
        asset: TransferAsset {
            data: Some("msg".to_string()),
        },
        signature: None,
        signatures: vec![],
    }
}

#[test]
fn test_sign_known_vector() {
    let keys = KeyPair::from_passphrase("secret");
    let signed = unsigned_transfer().sign(keys.private_key());

    let expected_unsigned = decode_hex(
        "00640000005d036a858ce89f844491762eb89e2bfbd50a4a0a0da658e4b2628b25b117ae099701ac12ca00e60400ca9a3b000000006d7367",
    );
    let expected_signature = decode_hex(
        "c2ff3de4882efe0402ef97926f43b8f59f3f1f9679d292ffe8e1eb502d1ecb3f728fedfe8e3a92b92316903ee6cebdba6475bab0551a0c64ab554a22ac9ee308",
    );
    assert_eq!(
        signed.sender_public_key.unwrap().to_vec(),
        keys.public_key().to_bytes().to_vec()
    );
    assert_eq!(signed.signature.unwrap().to_vec(), expected_signature);
    let mut expected_bytes = expected_unsigned.clone();
    expected_bytes.extend_from_slice(&expected_signature);
    assert_eq!(signed.to_bytes(), expected_bytes);
    assert_eq!(signed.id, Some(50417295591812560));
    assert_eq!(signed.compute_id(), 50417295591812560);
    assert!(signed.verify_signature());
    assert_eq!(signed.sender_address(), Some(keys.address()));
}

#[test]
fn test_tampering_breaks_signature() {
    let keys = KeyPair::from_passphrase("secret");
    let signed = unsigned_transfer().sign(keys.private_key());
    assert!(signed.verify_signature());

    let tampered = Transaction {
        amount: signed.amount + 1,
        ..signed.clone()
    };
    assert!(!tampered.verify_signature());

    let tampered = Transaction {
        recipient_id: "1L".parse().unwrap(),
        ..signed.clone()
    };
    assert!(!tampered.verify_signature());

    let other = KeyPair::from_passphrase("another secret");
    let tampered = Transaction {
        sender_public_key: Some(other.public_key().to_bytes()),
        ..signed
    };
    assert!(!tampered.verify_signature());
}

#[test]
fn test_unsigned_does_not_verify() {
    let tx = unsigned_transfer();
    assert!(!tx.verify_signature());
    assert_eq!(tx.sender_address(), None);
}

#[test]
fn test_resign_replaces_signature() {
    let first = KeyPair::from_passphrase("secret");
    let second = KeyPair::from_passphrase("another secret");
    let signed = unsigned_transfer().sign(first.private_key());
    let resigned = signed.clone().sign(second.private_key());
    assert!(resigned.verify_signature());
    assert_ne!(resigned.id, signed.id);
    assert_eq!(resigned.sender_address(), Some(second.address()));
}

#[test]
fn test_json_shape() {
    let keys = KeyPair::from_passphrase("secret");
    let signed = unsigned_transfer().sign(keys.private_key());
    let json = serde_json::to_value(&signed).unwrap();
    assert_eq!(json["id"], "50417295591812560");
    assert_eq!(json["type"], 0);
    assert_eq!(json["amount"], "1000000000");
    assert_eq!(json["fee"], "10000000");
    assert_eq!(json["recipientId"], "10881167371402274308L");
    assert_eq!(
        json["senderPublicKey"],
        "5d036a858ce89f844491762eb89e2bfbd50a4a0a0da658e4b2628b25b117ae09"
    );
    assert_eq!(json["timestamp"], 100);
    assert_eq!(json["asset"]["data"], "msg");
    assert_eq!(json["signature"].as_str().unwrap().len(), 128);
    assert_eq!(json["signatures"], serde_json::json!([]));

    let decoded: Transaction = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, signed);
}

#[test]
fn test_json_without_data_or_signature() {
    let tx = Transaction {
        asset: TransferAsset::default(),
        ..unsigned_transfer()
    };
    let json = serde_json::to_value(&tx).unwrap();
    assert_eq!(json["asset"], serde_json::json!({}));
    assert!(json.get("signature").is_none());
    assert!(json.get("id").is_none());
    assert!(json.get("senderPublicKey").is_none());
}
