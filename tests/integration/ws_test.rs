// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::create_ws_test_app;
use maxwatch::domain::models::product::NewProduct;
use maxwatch::domain::repositories::product_repository::ProductRepository;
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn lookup_round_trip_over_socket() {
    let app = create_ws_test_app().await;
    let stored = app
        .repository
        .insert(NewProduct {
            name: "Tile A".to_string(),
            price: 10.5,
        })
        .await
        .unwrap();

    let mut websocket = app.server.get_websocket("/ws").await.into_websocket().await;

    websocket
        .send_text(format!("get_product:{}", stored.id))
        .await;
    let reply = websocket.receive_text().await;

    let value: serde_json::Value = serde_json::from_str(&reply).unwrap();
    assert_eq!(value["id"], stored.id);
    assert_eq!(value["name"], "Tile A");
    assert_eq!(value["price"], 10.5);
}

#[tokio::test]
async fn unknown_id_yields_not_found_frame() {
    let app = create_ws_test_app().await;
    let mut websocket = app.server.get_websocket("/ws").await.into_websocket().await;

    websocket.send_text("get_product:9999").await;
    let reply = websocket.receive_text().await;

    assert_eq!(reply, r#"{"error": "Product not found"}"#);
}

#[tokio::test]
async fn malformed_id_yields_invalid_format_frame() {
    let app = create_ws_test_app().await;
    let mut websocket = app.server.get_websocket("/ws").await.into_websocket().await;

    websocket.send_text("get_product:abc").await;
    let reply = websocket.receive_text().await;

    assert_eq!(reply, r#"{"error": "Invalid product request format"}"#);
}

#[tokio::test]
async fn unrecognized_text_is_echoed_ten_times() {
    let app = create_ws_test_app().await;
    let mut websocket = app.server.get_websocket("/ws").await.into_websocket().await;

    websocket.send_text("hello").await;
    let reply = websocket.receive_text().await;

    assert_eq!(reply, "hello".repeat(10));
}

/// 通过REST创建的记录推送给已连接的订阅者
#[tokio::test]
async fn created_record_is_pushed_to_subscribers() {
    let app = create_ws_test_app().await;
    let mut websocket = app.server.get_websocket("/ws").await.into_websocket().await;

    // The upgrade completes before the server task registers the subscriber
    wait_for_subscribers(&app, 1).await;

    let response = app
        .server
        .post("/v1/products")
        .json(&json!({ "name": "Panel B", "price": 33.0 }))
        .await;
    assert_eq!(response.status_code(), axum::http::StatusCode::CREATED);

    let frame = websocket.receive_text().await;
    let event: serde_json::Value = serde_json::from_str(&frame).unwrap();
    assert_eq!(event["name"], "Panel B");
    assert_eq!(event["price"], 33.0);
}

#[tokio::test]
async fn disconnect_removes_subscriber_from_registry() {
    let app = create_ws_test_app().await;
    let websocket = app.server.get_websocket("/ws").await.into_websocket().await;

    wait_for_subscribers(&app, 1).await;

    drop(websocket);
    wait_for_subscribers(&app, 0).await;
    assert_eq!(app.hub.subscriber_count(), 0);
}

async fn wait_for_subscribers(app: &crate::helpers::TestApp, count: usize) {
    for _ in 0..100 {
        if app.hub.subscriber_count() == count {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!(
        "subscriber count never reached {}, still {}",
        count,
        app.hub.subscriber_count()
    );
}
