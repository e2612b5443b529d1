//! # Signing and Composition Properties
//!
//! Guarantees the rest of the protocol relies on: a role message has
//! exactly one byte encoding, its signature is reproducible and recovers
//! to the signer, and nothing between signing and submission alters the
//! signed fields.

use super::node::{block_hash, SimulatedNode};
use ex_01_authorization::{
    ActionKind, BuyerAuthMessage, BuyerMessage, RoleKind, RoleMessage, Seller1Message,
    SellerAuthMessage, SignableMessage, Wallet, WormholesPayload, PAYLOAD_VERSION,
};
use ex_03_dispatch::{ClientConfig, ExchangeClient};
use shared_crypto::text_hash;
use shared_types::{Address, Hash, U256};

const BUYER_KEY: &str = "057b05b9cff85c963c3ab90d26503700646781f938054171461b17ad5f7082db";
const SELLER_KEY: &str = "132a8ed2918b923a91c324d0e22a358ea6a82330a1faf956042f64bce8bf8e46";
const EXCHANGER: &str = "0x8b07aff2327a3b7e2876d899cafac99f7ae16b10";
const NFT: &str = "0x0000000000000000000000000000000000000001";

fn wallet(key: &str) -> Wallet {
    Wallet::from_private_key(key).unwrap()
}

fn bid(amount: &str, seller: &str) -> BuyerMessage {
    BuyerMessage::new(amount, NFT, EXCHANGER, "0x6000", seller)
}

#[test]
fn test_signing_is_deterministic() {
    let buyer = wallet(BUYER_KEY);

    let first = buyer.sign_buyer(bid("0xde0b6b3a7640000", "")).unwrap();
    let second = buyer.sign_buyer(bid("0xde0b6b3a7640000", "")).unwrap();

    assert_eq!(first.sig, second.sig);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn test_signature_recovers_to_signer() {
    for key in [BUYER_KEY, SELLER_KEY] {
        let signer = wallet(key);
        let ask = signer
            .sign_seller1(Seller1Message::new("0x1", NFT, EXCHANGER, "0x6000"))
            .unwrap();

        assert_eq!(ask.recover_signer().unwrap(), signer.address());
        let v = ask.signature().unwrap().v();
        assert!(v == 27 || v == 28);
    }
}

#[test]
fn test_digest_is_text_hash_of_concatenated_fields() {
    let message = bid("0xa", "");
    let expected = format!("0xa{}{}0x6000", NFT, EXCHANGER);

    assert_eq!(message.signable().canonical_bytes(), expected.as_bytes());
    assert_eq!(message.signable().digest(), text_hash(expected.as_bytes()));
}

#[test]
fn test_quantity_text_is_significant() {
    let buyer = wallet(BUYER_KEY);

    let short = buyer.sign_buyer(bid("0xa", "")).unwrap();
    let padded = buyer.sign_buyer(bid("0x0a", "")).unwrap();

    assert_ne!(short.signable().digest(), padded.signable().digest());
    assert_ne!(short.sig, padded.sig);
}

#[test]
fn test_empty_field_is_kept_but_distinct_from_zero() {
    let open = bid("0x1", "").signable();
    let zero = bid("0x1", "0x00").signable();

    assert_eq!(open.fields().len(), RoleKind::Buyer.schema().len());
    assert_eq!(open.fields()[4], "");
    assert_ne!(open.digest(), zero.digest());

    // Rebuilt from the schema with an explicit empty value: same bytes
    let rebuilt = SignableMessage::new(
        RoleKind::Buyer,
        vec![
            "0x1".to_string(),
            NFT.to_string(),
            EXCHANGER.to_string(),
            "0x6000".to_string(),
            String::new(),
        ],
    )
    .unwrap();
    assert_eq!(rebuilt.canonical_bytes(), open.canonical_bytes());
}

#[test]
fn test_composition_preserves_field_tuples() {
    let buyer = wallet(BUYER_KEY);
    let seller = wallet(SELLER_KEY);
    let bid = buyer.sign_buyer(bid("0x38D7EA4C68000", "")).unwrap();
    let ask = seller
        .sign_seller1(Seller1Message::new("0x38D7EA4C68000", NFT, EXCHANGER, "0x6000"))
        .unwrap();

    let payload = WormholesPayload {
        buyer: Some(bid.clone()),
        seller1: Some(ask.clone()),
        ..WormholesPayload::new(ActionKind::NftDoesNotAuthorizeExchanges, PAYLOAD_VERSION).unwrap()
    };
    let decoded = WormholesPayload::from_tx_data(&payload.to_tx_data().unwrap()).unwrap();

    let embedded_bid = decoded.buyer.as_ref().unwrap();
    let embedded_ask = decoded.seller1.as_ref().unwrap();
    assert_eq!(embedded_bid.signable().fields(), bid.signable().fields());
    assert_eq!(embedded_ask.signable().fields(), ask.signable().fields());
    assert_eq!(embedded_bid.sig, bid.sig);
    // Upper-case hex survives untouched
    assert_eq!(embedded_bid.message.amount, "0x38D7EA4C68000");
    assert_eq!(embedded_bid.recover_signer().unwrap(), buyer.address());
    assert_eq!(embedded_ask.recover_signer().unwrap(), seller.address());
}

#[test]
fn test_buyer_and_seller_grants_share_a_tuple() {
    let signer = wallet(BUYER_KEY);

    let as_buyer = signer
        .sign_buyer_auth(BuyerAuthMessage::new(EXCHANGER, "0x6000"))
        .unwrap();
    let as_seller = signer
        .sign_seller_auth(SellerAuthMessage::new(EXCHANGER, "0x6000"))
        .unwrap();

    // Only the payload slot tells these apart
    assert_eq!(
        as_buyer.signable().canonical_bytes(),
        as_seller.signable().canonical_bytes()
    );
    assert_eq!(as_buyer.sig, as_seller.sig);
    assert_ne!(as_buyer.role(), as_seller.role());
}

#[tokio::test]
async fn test_receipt_of_unsubmitted_hash_is_not_found() {
    super::init_test_logging();
    let node = SimulatedNode::new();
    let client = ExchangeClient::new(
        wallet(BUYER_KEY),
        node,
        ClientConfig::for_endpoint("http://127.0.0.1:8545"),
    );

    let err = client
        .transaction_receipt(Hash::repeat_byte(0x11))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_each_nonce_gets_an_independent_signature() {
    super::init_test_logging();
    let node = SimulatedNode::new();
    let sender = wallet(SELLER_KEY);
    node.fund(sender.address(), U256::exp10(18));
    let client = ExchangeClient::new(
        sender,
        node.clone(),
        ClientConfig::for_endpoint("http://127.0.0.1:8545"),
    );
    let to = Address::from_low_u64_be(0xbeef);

    let first = client.normal_transaction(to, U256::one(), b"").await.unwrap();
    let second = client.normal_transaction(to, U256::one(), b"").await.unwrap();

    let executed = node.executed();
    assert_ne!(first, second);
    assert_eq!(executed[0].transaction.tx.nonce, 0);
    assert_eq!(executed[1].transaction.tx.nonce, 1);
    assert_ne!(
        (executed[0].transaction.r, executed[0].transaction.s),
        (executed[1].transaction.r, executed[1].transaction.s)
    );
    for action in &executed {
        assert_eq!(action.transaction.recover_sender().unwrap(), client.address());
    }
}

#[tokio::test]
async fn test_mined_transaction_reads_back_from_its_block() {
    super::init_test_logging();
    let node = SimulatedNode::new();
    let sender = wallet(BUYER_KEY);
    node.fund(sender.address(), U256::exp10(18));
    let client = ExchangeClient::new(
        sender,
        node.clone(),
        ClientConfig::for_endpoint("http://127.0.0.1:8545"),
    );

    let hash = client
        .normal_transaction(Address::from_low_u64_be(0xbeef), U256::one(), b"memo")
        .await
        .unwrap();
    let receipt = client.transaction_receipt(hash).await.unwrap();
    let block = receipt.block_hash.unwrap();
    assert_eq!(block, block_hash(node.height()));

    let mined = client.transaction_in_block(block, 0).await.unwrap();
    assert_eq!(mined.hash(), hash);
    assert_eq!(mined.tx.data, b"memo".to_vec());
    assert_eq!(mined.recover_sender().unwrap(), client.address());

    // One transaction per block
    assert!(client
        .transaction_in_block(block, 1)
        .await
        .unwrap_err()
        .is_not_found());
}
