// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::Utc;
use salesrs::domain::models::sales_event::SalesEvent;
use salesrs::domain::repositories::sales_event_repository::SalesEventRepository;
use salesrs::domain::repositories::store_repository::StoreRepository;
use salesrs::domain::repositories::RepositoryError;
use salesrs::domain::services::signature_service::{self, SignatureError};
use salesrs::infrastructure::postgrest::client::PostgrestClient;
use salesrs::infrastructure::postgrest::sales_event_repo::PostgrestSalesEventRepository;
use salesrs::infrastructure::postgrest::store_repo::PostgrestStoreRepository;
use serde_json::json;
use std::time::Duration;
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SERVICE_KEY: &str = "service-role-key";

fn client(server: &MockServer) -> PostgrestClient {
    PostgrestClient::new(&server.uri(), SERVICE_KEY, Duration::from_secs(5)).unwrap()
}

fn event(order_id: &str) -> SalesEvent {
    SalesEvent {
        id: Uuid::new_v4(),
        order_id: order_id.to_string(),
        product_title: "Hidden Camera Detector Pro".to_string(),
        product_symbol: "📹".to_string(),
        revenue: 199.9,
        created_at: None,
        store_id: "shop-1".to_string(),
        store_name: "Shop One".to_string(),
        received_at: Utc::now(),
    }
}

#[tokio::test]
async fn store_lookup_sends_filter_and_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/stores"))
        .and(query_param("id", "eq.shop-1"))
        .and(header("apikey", SERVICE_KEY))
        .and(header("authorization", "Bearer service-role-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "shop-1", "name": "Shop One", "webhook_secret": "s3cret" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let repo = PostgrestStoreRepository::new(client(&server));
    let store = repo.find_by_id("shop-1").await.unwrap().unwrap();

    assert_eq!(store.name, "Shop One");
    assert_eq!(store.webhook_secret, "s3cret");
}

/// 密钥为 null 的店铺仍可解码，随后由签名校验拒绝
#[tokio::test]
async fn null_secret_decodes_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/stores"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "shop-2", "name": "Shop Two", "webhook_secret": null }
        ])))
        .mount(&server)
        .await;

    let repo = PostgrestStoreRepository::new(client(&server));
    let store = repo.find_by_id("shop-2").await.unwrap().unwrap();

    assert!(store.webhook_secret.is_empty());
    assert_eq!(
        signature_service::verify(&store.webhook_secret, b"{}", Some("AAAA")),
        Err(SignatureError::MissingSecret)
    );
}

#[tokio::test]
async fn empty_result_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/stores"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let repo = PostgrestStoreRepository::new(client(&server));

    assert!(repo.find_by_id("ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn store_lookup_error_is_remote() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/stores"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": "PGRST301",
            "message": "JWT expired"
        })))
        .mount(&server)
        .await;

    let repo = PostgrestStoreRepository::new(client(&server));
    let err = repo.find_by_id("shop-1").await.unwrap_err();

    match err {
        RepositoryError::Remote { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "JWT expired");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn insert_posts_event_row() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/sales_events"))
        .and(header("prefer", "return=minimal"))
        .and(body_partial_json(json!({
            "order_id": "7001",
            "product_symbol": "📹",
            "store_id": "shop-1"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let repo = PostgrestSalesEventRepository::new(client(&server));

    repo.insert(&event("7001")).await.unwrap();
}

/// 23505 表示唯一约束冲突
#[tokio::test]
async fn unique_violation_is_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/sales_events"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "23505",
            "details": "Key (order_id)=(7002) already exists.",
            "message": "duplicate key value violates unique constraint \"sales_events_order_id_key\""
        })))
        .mount(&server)
        .await;

    let repo = PostgrestSalesEventRepository::new(client(&server));
    let err = repo.insert(&event("7002")).await.unwrap_err();

    assert!(err.is_conflict(), "expected conflict, got {:?}", err);
}

#[tokio::test]
async fn other_insert_failure_is_not_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/sales_events"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let repo = PostgrestSalesEventRepository::new(client(&server));
    let err = repo.insert(&event("7003")).await.unwrap_err();

    match err {
        RepositoryError::Remote { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream exploded");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
