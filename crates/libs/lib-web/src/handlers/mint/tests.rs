//! # Mint Handler Tests
//!
//! Drive the full router (middleware included) against an in-memory drop.

use crate::server::{create_router, AppState, ServerConfig};
use crate::middleware::REQUEST_ID_HEADER;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use lib_chain::memory::MemoryDrop;
use lib_chain::ChainError;
use lib_core::{Credential, EvmAddress, MintConfig, Network};
use shared::{ErrorResponse, NftMetadata, PublicMintConfig};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

const CONTRACT: &str = "0xBB1B8021e31Ac8A34ba5963e48f65d6a4B43aa42";
const RECEIVER: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

// region: --- Helpers

fn test_config() -> MintConfig {
    MintConfig {
        private_key: Credential::new("test-key"),
        network: Network::Mumbai,
        contract_address: CONTRACT.parse().unwrap(),
        gateway_url: "http://127.0.0.1:9".to_string(),
        mint_timeout: Duration::from_secs(5),
        gateway_timeout: Duration::from_secs(5),
    }
}

fn memory_drop(supply: u64) -> MemoryDrop {
    MemoryDrop::new(Network::Mumbai, CONTRACT.parse().unwrap(), supply)
}

fn test_app(config: MintConfig, drop: MemoryDrop) -> Router {
    let server = ServerConfig {
        dist_dir: None,
        ..Default::default()
    };
    create_router(AppState::new(config, Arc::new(drop)), &server)
}

fn mint_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/mint-nft")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

async fn json_body<T: serde::de::DeserializeOwned>(response: Response<Body>) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

// endregion: --- Helpers

#[tokio::test]
async fn test_mint_success() {
    // Arrange
    let drop = memory_drop(10);
    let app = test_app(test_config(), drop.clone());
    let body = serde_json::json!({ "address": RECEIVER }).to_string();

    // Act
    let response = send(app, mint_request(body)).await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(&REQUEST_ID_HEADER));

    let metadata: NftMetadata = json_body(response).await;
    assert_eq!(metadata.id, "0");
    assert_eq!(metadata.name.as_deref(), Some("Memory Drop #0"));
    assert_eq!(
        drop.claims(),
        vec![(RECEIVER.parse::<EvmAddress>().unwrap(), 1)]
    );
}

#[tokio::test]
async fn test_mint_accepts_lowercase_address() {
    let drop = memory_drop(10);
    let app = test_app(test_config(), drop.clone());
    let body = serde_json::json!({ "address": RECEIVER.to_lowercase() }).to_string();

    let response = send(app, mint_request(body)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(drop.minted(), 1);
}

#[tokio::test]
async fn test_mint_rejects_bad_bodies_without_calling_sdk() {
    let cases: Vec<(&str, Body)> = vec![
        ("empty body", Body::empty()),
        ("malformed json", Body::from("{\"address\": ")),
        ("missing field", Body::from("{}")),
        ("wrong type", Body::from("{\"address\": 42}")),
        ("empty address", Body::from("{\"address\": \"  \"}")),
        ("short address", Body::from("{\"address\": \"0x1234\"}")),
        ("no prefix", Body::from("{\"address\": \"fB6916095ca1df60bB79Ce92cE3Ea74c37c5d359\"}")),
        (
            "bad checksum",
            Body::from("{\"address\": \"0xFB6916095ca1df60bB79Ce92cE3Ea74c37c5d359\"}"),
        ),
        (
            "zero address",
            Body::from("{\"address\": \"0x0000000000000000000000000000000000000000\"}"),
        ),
    ];

    for (name, body) in cases {
        let drop = memory_drop(10);
        let app = test_app(test_config(), drop.clone());

        let response = send(app, mint_request(body)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "case: {}", name);
        let error: ErrorResponse = json_body(response).await;
        assert_eq!(error.code.as_deref(), Some("InvalidInput"), "case: {}", name);
        assert!(!error.error.is_empty(), "case: {}", name);
        assert_eq!(drop.sessions(), 0, "case: {}", name);
    }
}

#[tokio::test]
async fn test_mint_rejects_missing_content_type() {
    let drop = memory_drop(10);
    let app = test_app(test_config(), drop.clone());
    let request = Request::builder()
        .method("POST")
        .uri("/api/mint-nft")
        .body(Body::from(serde_json::json!({ "address": RECEIVER }).to_string()))
        .unwrap();

    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(drop.sessions(), 0);
}

#[tokio::test]
async fn test_mint_checksum_error_names_expected_form() {
    let app = test_app(test_config(), memory_drop(10));
    let body = "{\"address\": \"0xFB6916095ca1df60bB79Ce92cE3Ea74c37c5d359\"}";

    let response = send(app, mint_request(body)).await;

    let error: ErrorResponse = json_body(response).await;
    assert!(error.error.contains(RECEIVER), "got: {}", error.error);
}

#[tokio::test]
async fn test_mint_supply_exhausted() {
    let drop = memory_drop(1);
    let body = serde_json::json!({ "address": RECEIVER }).to_string();

    let first = send(test_app(test_config(), drop.clone()), mint_request(body.clone())).await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = send(test_app(test_config(), drop.clone()), mint_request(body)).await;
    assert_eq!(second.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let error: ErrorResponse = json_body(second).await;
    assert_eq!(error.code.as_deref(), Some("SupplyExhausted"));
    assert_eq!(drop.minted(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_mints_share_the_supply() {
    let drop = memory_drop(5);
    let app = test_app(test_config(), drop.clone());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let app = app.clone();
            let body = serde_json::json!({ "address": RECEIVER }).to_string();
            tokio::spawn(async move { send(app, mint_request(body)).await })
        })
        .collect();

    let mut ids = Vec::new();
    let mut exhausted = 0;
    for handle in handles {
        let response = handle.await.unwrap();
        match response.status() {
            StatusCode::OK => ids.push(json_body::<NftMetadata>(response).await.id),
            StatusCode::INTERNAL_SERVER_ERROR => {
                let error: ErrorResponse = json_body(response).await;
                assert_eq!(error.code.as_deref(), Some("SupplyExhausted"));
                exhausted += 1;
            }
            other => panic!("unexpected status {}", other),
        }
    }

    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5);
    assert_eq!(exhausted, 3);
    assert_eq!(drop.sessions(), 8);
    assert_eq!(drop.minted(), 5);
}

#[tokio::test]
async fn test_mint_sdk_failure_is_500() {
    let drop = memory_drop(10).failing_with(ChainError::Network("connection reset".to_string()));
    let app = test_app(test_config(), drop);
    let body = serde_json::json!({ "address": RECEIVER }).to_string();

    let response = send(app, mint_request(body)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorResponse = json_body(response).await;
    assert_eq!(error.code.as_deref(), Some("Sdk"));
    assert!(!error.error.contains("connection reset"));
}

#[tokio::test]
async fn test_mint_claim_rejected_keeps_reason() {
    let drop = memory_drop(10)
        .failing_with(ChainError::ClaimRejected("wallet limit reached".to_string()));
    let app = test_app(test_config(), drop);
    let body = serde_json::json!({ "address": RECEIVER }).to_string();

    let response = send(app, mint_request(body)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorResponse = json_body(response).await;
    assert_eq!(error.code.as_deref(), Some("ClaimRejected"));
    assert_eq!(error.error, "wallet limit reached");
}

#[tokio::test]
async fn test_mint_timeout() {
    let config = MintConfig {
        mint_timeout: Duration::from_millis(50),
        ..test_config()
    };
    let drop = memory_drop(10).with_delay(Duration::from_secs(5));
    let app = test_app(config, drop);
    let body = serde_json::json!({ "address": RECEIVER }).to_string();

    let response = send(app, mint_request(body)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorResponse = json_body(response).await;
    assert_eq!(error.code.as_deref(), Some("Timeout"));
}

#[tokio::test]
async fn test_mint_wrong_method_is_json() {
    let app = test_app(test_config(), memory_drop(10));
    let request = Request::builder()
        .uri("/api/mint-nft")
        .body(Body::empty())
        .unwrap();

    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let error: ErrorResponse = json_body(response).await;
    assert_eq!(error.code.as_deref(), Some("InvalidInput"));
}

#[tokio::test]
async fn test_public_config() {
    let app = test_app(test_config(), memory_drop(10));
    let request = Request::builder()
        .uri("/api/config")
        .body(Body::empty())
        .unwrap();

    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let config: PublicMintConfig = json_body(response).await;
    assert_eq!(
        config,
        PublicMintConfig {
            network: "mumbai".to_string(),
            chain_id: 80_001,
            contract_address: CONTRACT.to_string(),
        }
    );
}

#[tokio::test]
async fn test_health_and_unknown_api_route() {
    let health = send(
        test_app(test_config(), memory_drop(10)),
        Request::builder().uri("/health").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(health.status(), StatusCode::OK);
    assert!(health.headers().contains_key(&REQUEST_ID_HEADER));

    let unknown = send(
        test_app(test_config(), memory_drop(10)),
        Request::builder().uri("/api/nope").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = json_body(unknown).await;
    assert_eq!(error.code.as_deref(), Some("NotFound"));
}
