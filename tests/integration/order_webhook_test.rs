// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, post_signed, post_webhook, STORE_ID, STORE_NAME};
use axum::http::StatusCode;
use salesrs::domain::models::order::ORDERS_CREATE_TOPIC;
use salesrs::domain::services::signature_service;
use serde_json::{json, Value};

fn order_body(id: Value, title: &str, subtotal: &str) -> String {
    json!({
        "id": id,
        "created_at": "2024-03-01T10:15:00-05:00",
        "subtotal_price": subtotal,
        "currency": "USD",
        "line_items": [
            { "title": title, "quantity": 1 },
            { "title": "USB Cable", "quantity": 2 }
        ]
    })
    .to_string()
}

/// 新订单写入一次，重复投递返回200且不产生第二行
#[tokio::test]
async fn new_order_is_recorded_once() {
    let app = create_test_app().await;
    let body = order_body(json!(820982911946154508u64), "Hidden Camera Detector Pro", "199.90");

    let first = post_signed(&app, ORDERS_CREATE_TOPIC, &body).await;
    first.assert_status(StatusCode::CREATED);
    assert_eq!(first.text(), "Webhook processed successfully.");

    let second = post_signed(&app, ORDERS_CREATE_TOPIC, &body).await;
    second.assert_status(StatusCode::OK);
    assert_eq!(second.text(), "Duplicate order, ignored.");

    let count = app
        .events
        .count_by_order_id("820982911946154508")
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn recorded_event_carries_derived_fields() {
    let app = create_test_app().await;
    let body = order_body(json!(1001), "Mini GPS Tracker", "49.50");

    post_signed(&app, ORDERS_CREATE_TOPIC, &body)
        .await
        .assert_status(StatusCode::CREATED);

    let event = app
        .events
        .find_by_order_id("1001")
        .await
        .unwrap()
        .expect("sales event should exist");

    assert_eq!(event.product_title, "Mini GPS Tracker");
    assert_eq!(event.product_symbol, "📍");
    assert_eq!(event.revenue, 49.50);
    assert_eq!(event.created_at.as_deref(), Some("2024-03-01T10:15:00-05:00"));
    assert_eq!(event.store_id, STORE_ID);
    assert_eq!(event.store_name, STORE_NAME);
}

#[tokio::test]
async fn order_without_line_items_uses_fallback_title() {
    let app = create_test_app().await;
    let body = json!({ "id": "gid-77", "subtotal_price": "oops" }).to_string();

    post_signed(&app, ORDERS_CREATE_TOPIC, &body)
        .await
        .assert_status(StatusCode::CREATED);

    let event = app.events.find_by_order_id("gid-77").await.unwrap().unwrap();
    assert_eq!(event.product_title, "Shopify Order");
    assert_eq!(event.product_symbol, "🛒");
    assert_eq!(event.revenue, 0.0);
    assert!(event.created_at.is_none());
}

/// 行项目形状异常时仍然写入，标题取第一个可用标题或后备名称
#[tokio::test]
async fn irregular_line_items_are_still_recorded() {
    let app = create_test_app().await;

    let mixed = json!({ "id": 8101, "line_items": [{ "title": "Bug Detector" }, 5] }).to_string();
    post_signed(&app, ORDERS_CREATE_TOPIC, &mixed)
        .await
        .assert_status(StatusCode::CREATED);
    let event = app.events.find_by_order_id("8101").await.unwrap().unwrap();
    assert_eq!(event.product_title, "Bug Detector");
    assert_eq!(event.product_symbol, "🐞");

    let odd = json!({ "id": 8102, "line_items": "none" }).to_string();
    post_signed(&app, ORDERS_CREATE_TOPIC, &odd)
        .await
        .assert_status(StatusCode::CREATED);
    let event = app.events.find_by_order_id("8102").await.unwrap().unwrap();
    assert_eq!(event.product_title, "Shopify Order");
}

/// 非 orders/create 主题只确认，不解析也不写入
#[tokio::test]
async fn other_topic_is_acknowledged_without_write() {
    let app = create_test_app().await;
    let body = "this is not json";

    let response = post_signed(&app, "orders/updated", body).await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.text(), "Webhook received, but topic is ignored.");
}

#[tokio::test]
async fn missing_topic_is_ignored() {
    let app = create_test_app().await;
    let body = order_body(json!(2002), "Bug Detector", "10.00");
    let signature = signature_service::sign(super::helpers::STORE_SECRET, body.as_bytes());

    let response = post_webhook(&app, Some(STORE_ID), None, Some(&signature), &body).await;

    response.assert_status(StatusCode::OK);
    assert_eq!(app.events.count_by_order_id("2002").await.unwrap(), 0);
}

#[tokio::test]
async fn missing_store_id_is_bad_request() {
    let app = create_test_app().await;
    let body = order_body(json!(3003), "Bug Detector", "10.00");

    let response = post_webhook(&app, None, Some(ORDERS_CREATE_TOPIC), Some("sig"), &body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert!(error["error"].as_str().unwrap().contains("store_id"));
}

#[tokio::test]
async fn unknown_store_is_not_found() {
    let app = create_test_app().await;
    let body = order_body(json!(4004), "Bug Detector", "10.00");

    let response = post_webhook(
        &app,
        Some("no-such-shop"),
        Some(ORDERS_CREATE_TOPIC),
        Some("sig"),
        &body,
    )
    .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bad_signature_is_unauthorized() {
    let app = create_test_app().await;
    let body = order_body(json!(5005), "Bug Detector", "10.00");
    let forged = signature_service::sign("some-other-secret", body.as_bytes());

    let response = post_webhook(
        &app,
        Some(STORE_ID),
        Some(ORDERS_CREATE_TOPIC),
        Some(&forged),
        &body,
    )
    .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(app.events.count_by_order_id("5005").await.unwrap(), 0);
}

#[tokio::test]
async fn missing_signature_is_unauthorized() {
    let app = create_test_app().await;
    let body = order_body(json!(6006), "Bug Detector", "10.00");

    let response =
        post_webhook(&app, Some(STORE_ID), Some(ORDERS_CREATE_TOPIC), None, &body).await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

/// 签名在主题过滤之前校验
#[tokio::test]
async fn bad_signature_on_ignored_topic_is_still_unauthorized() {
    let app = create_test_app().await;

    let response = post_webhook(
        &app,
        Some(STORE_ID),
        Some("products/update"),
        Some("AAAA"),
        "{}",
    )
    .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn invalid_json_is_bad_request() {
    let app = create_test_app().await;

    let response = post_signed(&app, ORDERS_CREATE_TOPIC, "{\"id\": 1,").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn order_without_id_is_bad_request() {
    let app = create_test_app().await;
    let body = json!({ "subtotal_price": "5.00" }).to_string();

    let response = post_signed(&app, ORDERS_CREATE_TOPIC, &body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
