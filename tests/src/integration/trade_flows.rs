//! # Multi-party Trade Flows
//!
//! Each party runs its own `ExchangeClient` against one shared
//! [`SimulatedNode`]. Authorizations travel between parties as JSON, the
//! way a marketplace backend relays them.

use super::node::{SimulatedNode, REJECTED};
use ex_01_authorization::{
    BuyerMessage, DelegateMessage, RoleAuthorization, RoleKind, Seller2Message, Wallet,
};
use ex_02_rpc_gateway::GatewayError;
use ex_03_dispatch::{ClientConfig, ExchangeClient, ExchangeError};
use shared_types::{Address, U256};

const BUYER_KEY: &str = "057b05b9cff85c963c3ab90d26503700646781f938054171461b17ad5f7082db";
const SELLER_KEY: &str = "132a8ed2918b923a91c324d0e22a358ea6a82330a1faf956042f64bce8bf8e46";
const OWNER_KEY: &str = "0bbbb60fa9ff05081a3b63aa8b043d1281cd860dc06d92800aee5b1fdf5bc8d7";
const RELAYER_KEY: &str = "50fd980dab6b010c001fcab754421792b451c48706d5bb69ac0ad93ab8dd7aa1";

const NFT: &str = "0x0000000000000000000000000000000000000001";
const ONE_ERB: &str = "0xde0b6b3a7640000";

fn erb(n: u64) -> U256 {
    U256::from(n) * U256::exp10(18)
}

fn party(node: &SimulatedNode, key: &str) -> ExchangeClient<SimulatedNode> {
    super::init_test_logging();
    let wallet = Wallet::from_private_key(key).unwrap();
    node.fund(wallet.address(), erb(10));
    ExchangeClient::new(
        wallet,
        node.clone(),
        ClientConfig::for_endpoint("http://127.0.0.1:8545"),
    )
}

fn text(address: Address) -> String {
    format!("{:?}", address)
}

#[tokio::test]
async fn test_lazy_mint_purchase() -> anyhow::Result<()> {
    let node = SimulatedNode::new();
    let seller = party(&node, SELLER_KEY);
    let buyer = party(&node, BUYER_KEY);
    let exchanger = text(party(&node, OWNER_KEY).address());

    // Seller lists off-chain; the listing reaches the buyer as JSON
    let listing = seller
        .sign_seller2_until_deadline(ONE_ERB, "0xa", "/ipfs/qqqqqqqqqq", "0", &exchanger)
        .await?
        .to_json()?;

    let received = RoleAuthorization::<Seller2Message>::from_json(&listing)?;
    received.verify_signer(&seller.address())?;
    let hash = buyer.foundry_trade_buyer(received).await?;

    let receipt = buyer.transaction_receipt(hash).await?;
    assert!(receipt.succeeded());
    assert_eq!(receipt.from, Some(buyer.address()));

    let executed = node.last_executed().unwrap();
    assert_eq!(executed.hash, hash);
    assert_eq!(executed.transaction.tx.value, erb(1));
    assert_eq!(executed.signers, vec![(RoleKind::Seller2, seller.address())]);
    Ok(())
}

#[tokio::test]
async fn test_exchange_match_by_authorized_relayer() -> anyhow::Result<()> {
    let node = SimulatedNode::new();
    let buyer = party(&node, BUYER_KEY);
    let seller = party(&node, SELLER_KEY);
    let owner = party(&node, OWNER_KEY);
    let relayer = party(&node, RELAYER_KEY);
    let exchanger = text(owner.address());

    let bid = buyer
        .sign_buyer_until_deadline(ONE_ERB, NFT, &exchanger, "")
        .await?;
    let ask = seller
        .sign_seller1_until_deadline(ONE_ERB, NFT, &exchanger)
        .await?;
    let grant = owner
        .sign_exchanger_auth_until_deadline(&exchanger, &text(relayer.address()))
        .await?;

    relayer
        .nft_exchange_match(bid, ask, grant, buyer.address())
        .await?;

    let executed = node.last_executed().unwrap();
    assert_eq!(executed.from, relayer.address());
    assert_eq!(executed.transaction.tx.to, buyer.address());
    assert_eq!(
        executed.signers,
        vec![
            (RoleKind::Buyer, buyer.address()),
            (RoleKind::Seller1, seller.address()),
            (RoleKind::ExchangerAuth, owner.address()),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_exchanger_grant_for_another_relayer_is_rejected() -> anyhow::Result<()> {
    let node = SimulatedNode::new();
    let buyer = party(&node, BUYER_KEY);
    let seller = party(&node, SELLER_KEY);
    let owner = party(&node, OWNER_KEY);
    let relayer = party(&node, RELAYER_KEY);
    let exchanger = text(owner.address());

    let bid = buyer
        .sign_buyer_until_deadline(ONE_ERB, NFT, &exchanger, "")
        .await?;
    let ask = seller
        .sign_seller1_until_deadline(ONE_ERB, NFT, &exchanger)
        .await?;
    // Granted to the seller, submitted by the relayer
    let grant = owner
        .sign_exchanger_auth_until_deadline(&exchanger, &text(seller.address()))
        .await?;

    let err = relayer
        .nft_exchange_match(bid, ask, grant, buyer.address())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ExchangeError::Remote(GatewayError::Rpc { code: REJECTED, .. })
    ));
    assert!(node.executed().is_empty());
    assert_eq!(node.nonce_of(relayer.address()), 0);
    Ok(())
}

#[tokio::test]
async fn test_expired_authorization_is_rejected() -> anyhow::Result<()> {
    let node = SimulatedNode::new();
    let buyer = party(&node, BUYER_KEY);
    let seller = party(&node, SELLER_KEY);
    let exchanger = text(party(&node, OWNER_KEY).address());

    let bid = buyer
        .sign_buyer_until_deadline(ONE_ERB, NFT, &exchanger, "")
        .await?;
    node.mine(buyer.config().deadline_offset + 1);

    let err = seller
        .transaction_nft(bid, buyer.address())
        .await
        .unwrap_err();

    match err {
        ExchangeError::Remote(GatewayError::Rpc { message, .. }) => {
            assert!(message.contains("expired"), "{}", message);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_tampered_authorization_recovers_another_signer() -> anyhow::Result<()> {
    let node = SimulatedNode::new();
    let buyer = party(&node, BUYER_KEY);
    let seller = party(&node, SELLER_KEY);
    let exchanger = text(party(&node, OWNER_KEY).address());

    let mut bid = buyer
        .sign_buyer_until_deadline(ONE_ERB, NFT, &exchanger, "")
        .await?;
    bid.message.amount = "0x1".to_string();

    // Detectable locally before spending gas
    assert!(bid.verify_signer(&buyer.address()).is_err());

    // The node only sees a valid signature from somebody else
    seller.transaction_nft(bid, buyer.address()).await?;
    let executed = node.last_executed().unwrap();
    assert_eq!(executed.signers.len(), 1);
    assert_ne!(executed.signers[0].1, buyer.address());
    Ok(())
}

#[tokio::test]
async fn test_batch_sell_with_five_authorizations() -> anyhow::Result<()> {
    let node = SimulatedNode::new();
    let buyer = party(&node, BUYER_KEY);
    let seller = party(&node, SELLER_KEY);
    let owner = party(&node, OWNER_KEY);
    let relayer = party(&node, RELAYER_KEY);
    let exchanger = text(owner.address());

    let bid = buyer
        .sign_buyer_until_deadline(ONE_ERB, NFT, &exchanger, "")
        .await?;
    let buyer_auth = buyer.sign_buyer_auth_until_deadline(&exchanger).await?;
    let ask = seller
        .sign_seller1_until_deadline(ONE_ERB, NFT, &exchanger)
        .await?;
    let seller_auth = seller.sign_seller_auth_until_deadline(&exchanger).await?;
    let grant = owner
        .sign_exchanger_auth_until_deadline(&exchanger, &text(relayer.address()))
        .await?;

    relayer
        .batch_sell_transfer(bid, ask, buyer_auth, seller_auth, grant, buyer.address())
        .await?;

    let executed = node.last_executed().unwrap();
    assert_eq!(executed.payload.as_ref().map(|p| p.type_code), Some(27));
    assert_eq!(
        executed.signers,
        vec![
            (RoleKind::Buyer, buyer.address()),
            (RoleKind::Seller1, seller.address()),
            (RoleKind::BuyerAuth, buyer.address()),
            (RoleKind::SellerAuth, seller.address()),
            (RoleKind::ExchangerAuth, owner.address()),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_force_buy_of_snft_with_open_amount() -> anyhow::Result<()> {
    let node = SimulatedNode::new();
    let buyer = party(&node, BUYER_KEY);
    let owner = party(&node, OWNER_KEY);
    let relayer = party(&node, RELAYER_KEY);
    let exchanger = text(owner.address());
    let deadline = relayer.block_deadline().await?;

    // Amount left open for the exchange to fill in
    let bid = buyer.wallet().sign_buyer(BuyerMessage::new(
        "",
        "0x8000000000000000000000000000000000000000",
        exchanger.as_str(),
        deadline.as_str(),
        "",
    ))?;
    let buyer_auth = buyer.sign_buyer_auth_until_deadline(&exchanger).await?;
    let grant = owner
        .sign_exchanger_auth_until_deadline(&exchanger, &text(relayer.address()))
        .await?;

    relayer
        .force_buying_transfer(bid, buyer_auth, grant, buyer.address())
        .await?;

    let executed = node.last_executed().unwrap();
    let payload = executed.payload.unwrap();
    assert_eq!(payload.buyer.unwrap().message.amount, "");
    assert_eq!(executed.signers[0], (RoleKind::Buyer, buyer.address()));
    Ok(())
}

#[tokio::test]
async fn test_pledge_through_delegated_proxy() -> anyhow::Result<()> {
    let node = SimulatedNode::new();
    let owner = party(&node, OWNER_KEY);
    let proxy = party(&node, RELAYER_KEY);

    let proxy_sign = proxy.wallet().sign_delegate(&DelegateMessage::new(
        text(proxy.address()),
        text(owner.address()),
    ))?;
    owner
        .token_pledge(
            &text(proxy.address()),
            Some(&proxy_sign),
            "exchange",
            "www.exchange.com",
            100,
            erb(7),
        )
        .await?;

    let executed = node.last_executed().unwrap();
    assert_eq!(executed.transaction.tx.to, owner.address());
    assert_eq!(executed.transaction.tx.value, erb(7));
    assert_eq!(
        executed.payload.unwrap().proxy_sign,
        Some(proxy_sign.to_hex())
    );
    Ok(())
}

#[tokio::test]
async fn test_plain_transfer_moves_balance() -> anyhow::Result<()> {
    let node = SimulatedNode::new();
    let buyer = party(&node, BUYER_KEY);
    let seller = party(&node, SELLER_KEY);

    buyer
        .normal_transaction(seller.address(), erb(3), b"")
        .await?;

    assert_eq!(buyer.balance(buyer.address()).await?, erb(7));
    assert_eq!(buyer.balance(seller.address()).await?, erb(13));
    assert!(node.last_executed().unwrap().payload.is_none());
    Ok(())
}

#[tokio::test]
async fn test_insufficient_funds_is_remote_error() -> anyhow::Result<()> {
    let node = SimulatedNode::new();
    let buyer = party(&node, BUYER_KEY);

    let err = buyer
        .normal_transaction(Address::from_low_u64_be(1), erb(11), b"")
        .await
        .unwrap_err();

    assert!(matches!(err, ExchangeError::Remote(_)));
    assert_eq!(node.balance_of(buyer.address()), erb(10));
    Ok(())
}

#[tokio::test]
async fn test_parties_submit_concurrently() -> anyhow::Result<()> {
    let node = SimulatedNode::new();
    let buyer = party(&node, BUYER_KEY);
    let seller = party(&node, SELLER_KEY);

    for _ in 0..3 {
        let (a, b) = tokio::join!(
            buyer.normal_transaction(seller.address(), U256::one(), b""),
            seller.normal_transaction(buyer.address(), U256::one(), b""),
        );
        a?;
        b?;
    }

    assert_eq!(node.nonce_of(buyer.address()), 3);
    assert_eq!(node.nonce_of(seller.address()), 3);
    assert_eq!(node.height(), super::node::GENESIS_HEIGHT + 6);
    Ok(())
}
