//! HTTP surface, driven in-process through the full middleware stack

mod common;

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use common::{RecordingGateway, seed_menu_item, state_with, stock_item};
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app() -> (Router, kitchen_server::ServerState) {
    let gateway = Arc::new(RecordingGateway::with_stock(vec![stock_item(
        5, "Rice", 12.0,
    )]));
    let state = state_with(gateway).await;
    (kitchen_server::api::build_app(state.clone()), state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_create_then_get_order() {
    let (app, state) = app().await;
    let soup = seed_menu_item(&state, "Tomato Soup", 4.5, true).await;

    let (status, body) = send(
        &app,
        "POST",
        "/orders",
        Some(json!({
            "restaurantId": 1,
            "tableNumber": "A4",
            "staffId": 9,
            "orderItems": [{ "menuItemId": soup.id, "quantity": 2, "notes": "hot" }]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Kitchen order created successfully");
    assert_eq!(body["data"]["status"], "PENDING");
    assert_eq!(body["data"]["totalAmount"], 9.0);
    assert_eq!(body["data"]["orderItems"][0]["itemName"], "Tomato Soup");

    let id = body["data"]["id"].as_i64().unwrap();
    let (status, body) = send(&app, "GET", &format!("/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["tableNumber"], "A4");
}

#[tokio::test]
async fn test_missing_order_is_404_envelope() {
    let (app, _) = app().await;
    let (status, body) = send(&app, "GET", "/orders/404", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], 4001);
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["details"]["orderId"], 404);
}

#[tokio::test]
async fn test_unavailable_item_is_422() {
    let (app, state) = app().await;
    let item = seed_menu_item(&state, "Lobster", 50.0, false).await;

    let (status, body) = send(
        &app,
        "POST",
        "/orders",
        Some(json!({
            "restaurantId": 1,
            "orderItems": [{ "menuItemId": item.id, "quantity": 1 }]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 6002);
    assert!(body["message"].as_str().unwrap().contains("Lobster"));
}

#[tokio::test]
async fn test_status_endpoint_validates_input() {
    let (app, state) = app().await;
    let soup = seed_menu_item(&state, "Tomato Soup", 4.0, true).await;
    let (_, body) = send(
        &app,
        "POST",
        "/orders",
        Some(json!({
            "restaurantId": 1,
            "orderItems": [{ "menuItemId": soup.id, "quantity": 1 }]
        })),
    )
    .await;
    let id = body["data"]["id"].as_i64().unwrap();
    let uri = format!("/orders/{id}/status");

    let (status, body) = send(&app, "PATCH", &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Status is required");

    let (status, body) = send(&app, "PATCH", &uri, Some(json!({ "status": "BURNT" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4005);

    let (status, body) = send(&app, "PATCH", &uri, Some(json!({ "status": "SERVED" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4002);

    let (status, body) = send(&app, "PATCH", &uri, Some(json!({ "status": "cooking" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Order status updated to COOKING");
    assert_eq!(body["data"]["status"], "COOKING");
}

#[tokio::test]
async fn test_malformed_requests_get_error_envelope() {
    let (app, state) = app().await;
    let soup = seed_menu_item(&state, "Tomato Soup", 4.0, true).await;
    let (_, body) = send(
        &app,
        "POST",
        "/orders",
        Some(json!({
            "restaurantId": 1,
            "orderItems": [{ "menuItemId": soup.id, "quantity": 1 }]
        })),
    )
    .await;
    let id = body["data"]["id"].as_i64().unwrap();

    // No body, no content type
    let (status, body) = send(&app, "PATCH", &format!("/orders/{id}/status"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], 5);
    assert!(body["data"].is_null());

    // Required field missing from the body
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/orders/{id}"),
        Some(json!({ "tableNumber": "B2" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], 2);
    assert!(body["message"].as_str().unwrap().contains("restaurantId"));

    // Path segment that is not an id
    let (status, body) = send(&app, "GET", "/orders/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], 5);

    // Query value of the wrong type
    let (status, body) = send(
        &app,
        "GET",
        "/orders/inventory/check-stock?itemName=Rice&quantity=lots",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_assign_staff_requires_staff_id() {
    let (app, state) = app().await;
    let soup = seed_menu_item(&state, "Tomato Soup", 4.0, true).await;
    let (_, body) = send(
        &app,
        "POST",
        "/orders",
        Some(json!({
            "restaurantId": 1,
            "orderItems": [{ "menuItemId": soup.id, "quantity": 1 }]
        })),
    )
    .await;
    let id = body["data"]["id"].as_i64().unwrap();
    let uri = format!("/orders/{id}/assign-staff");

    let (status, body) = send(&app, "PATCH", &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "staffId");

    let (status, body) = send(&app, "PATCH", &uri, Some(json!({ "staffId": 33 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["staffId"], 33);
}

#[tokio::test]
async fn test_list_and_counts() {
    let (app, state) = app().await;
    let soup = seed_menu_item(&state, "Tomato Soup", 4.0, true).await;
    for staff in [1, 2] {
        send(
            &app,
            "POST",
            "/orders",
            Some(json!({
                "restaurantId": 1,
                "staffId": staff,
                "orderItems": [{ "menuItemId": soup.id, "quantity": 1 }]
            })),
        )
        .await;
    }

    let (status, body) = send(&app, "GET", "/orders?staffId=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, _) = send(&app, "GET", "/orders?status=nope", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, "GET", "/orders/dashboard/counts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({ "PENDING": 2, "COOKING": 0, "READY": 0, "SERVED": 0 })
    );

    let (status, body) = send(&app, "GET", "/orders/count/pending", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["count"], 2);
    assert_eq!(body["data"]["status"], "PENDING");
}

#[tokio::test]
async fn test_delete_order() {
    let (app, state) = app().await;
    let soup = seed_menu_item(&state, "Tomato Soup", 4.0, true).await;
    let (_, body) = send(
        &app,
        "POST",
        "/orders",
        Some(json!({
            "restaurantId": 1,
            "orderItems": [{ "menuItemId": soup.id, "quantity": 1 }]
        })),
    )
    .await;
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, "DELETE", &format!("/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = send(&app, "DELETE", &format!("/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_inventory_routes() {
    let (app, _) = app().await;

    let (status, body) = send(&app, "GET", "/orders/inventory", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["itemName"], "Rice");

    let (status, _) = send(&app, "GET", "/orders/inventory/5", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", "/orders/inventory/6", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 7001);

    let (status, body) = send(
        &app,
        "GET",
        "/orders/inventory/check-stock?itemName=Rice&quantity=20",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["inStock"], false);
}

#[tokio::test]
async fn test_menu_routes() {
    let (app, _) = app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/menu",
        Some(json!({
            "itemName": "Pancakes",
            "category": "Breakfast",
            "price": 6.5,
            "mealType": "BREAKFAST",
            "menuDate": "2026-10-18",
            "restaurantId": 3
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["isAvailable"], true);
    assert_eq!(body["data"]["serviceType"], "RESTAURANT");
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, "GET", "/menu/available?restaurantId=3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/menu/{id}/toggle-availability"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["isAvailable"], false);

    let (_, body) = send(&app, "GET", "/menu/available?restaurantId=3", None).await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let (status, body) = send(&app, "GET", "/menu/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6001);

    let (status, _) = send(&app, "PATCH", "/menu/999/toggle-availability", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_and_request_id() {
    let (app, _) = app().await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"]["status"], "ok");
}
