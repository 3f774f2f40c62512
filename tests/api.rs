//! Black-box scenarios against the item router.
//!
//! Every test builds its own router, so stores never leak between tests.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use item_service::api::{create_router, AppState};
use item_service::items::Item;

struct TestApp {
    router: Router,
    state: AppState,
}

impl TestApp {
    fn new() -> Self {
        let state = AppState::new();
        Self {
            router: create_router(state.clone()),
            state,
        }
    }

    async fn request(&self, method: Method, uri: &str, body: Body, json: bool) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if json {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, Body::empty(), false).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Body::from(body.to_string()), true)
            .await
    }

    async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Body::from(body.to_string()), true)
            .await
    }

    async fn stored(&self) -> Vec<Item> {
        self.state.store.list().await
    }
}

#[tokio::test]
async fn health_is_ok() {
    let app = TestApp::new();
    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn empty_store_lists_nothing() {
    let app = TestApp::new();
    let (status, body) = app.get("/items").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn list_reflects_created_items() {
    let app = TestApp::new();
    app.post("/items", json!({"name": "Apples", "quantity": 3})).await;

    let (status, body) = app.get("/items").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"name": "Apples", "quantity": 3}]));
}

#[tokio::test]
async fn first_and_second_creates_get_sequential_indices() {
    let app = TestApp::new();

    let (status, body) = app.post("/items", json!({"name": "Apples", "quantity": 3})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "item added");
    assert_eq!(body["item"], json!({"name": "Apples", "quantity": 3}));
    assert_eq!(body["index"], 0);
    assert_eq!(app.stored().await, vec![Item::new("Apples", 3)]);

    let (status, body) = app.post("/items", json!({"name": "Bananas", "quantity": 5})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["index"], 1);
    assert_eq!(
        app.stored().await,
        vec![Item::new("Apples", 3), Item::new("Bananas", 5)]
    );
}

#[tokio::test]
async fn missing_fields_are_bad_requests() {
    let app = TestApp::new();

    for payload in [json!({"quantity": 3}), json!({"name": "Apples"}), json!({})] {
        let (status, body) = app.post("/items", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Invalid request payload");
        assert!(body["errors"].as_array().is_some_and(|e| !e.is_empty()));
    }
    assert!(app.stored().await.is_empty());
}

#[tokio::test]
async fn wrong_types_are_bad_requests() {
    let app = TestApp::new();
    let (status, body) = app.post("/items", json!({"name": 123, "quantity": "abc"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().map(Vec::len), Some(2));
    assert!(app.stored().await.is_empty());
}

#[tokio::test]
async fn blank_names_are_rejected() {
    let app = TestApp::new();

    for name in ["", "   "] {
        let (status, body) = app.post("/items", json!({"name": name, "quantity": 3})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"detail": "Name must not be empty"}));
    }
    assert!(app.stored().await.is_empty());
}

#[tokio::test]
async fn quantities_below_one_are_rejected() {
    let app = TestApp::new();

    for quantity in [0, -5] {
        let (status, body) = app
            .post("/items", json!({"name": "Apples", "quantity": quantity}))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"detail": "Quantity must be >= 1"}));
    }
    assert!(app.stored().await.is_empty());
}

#[tokio::test]
async fn non_json_body_is_bad_request_with_errors() {
    let app = TestApp::new();
    let (status, body) = app
        .request(Method::POST, "/items", Body::from("this is not json"), true)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Invalid request payload");
    assert_eq!(body["errors"][0]["type"], "json_invalid");
    assert!(app.stored().await.is_empty());
}

#[tokio::test]
async fn missing_content_type_is_bad_request() {
    let app = TestApp::new();
    let (status, body) = app
        .request(
            Method::POST,
            "/items",
            Body::from(r#"{"name":"Apples","quantity":3}"#),
            false,
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["type"], "content_type");
}

#[tokio::test]
async fn update_replaces_item_in_place() {
    let app = TestApp::new();
    app.post("/items", json!({"name": "Apples", "quantity": 3})).await;
    app.post("/items", json!({"name": "Bananas", "quantity": 5})).await;

    let (status, body) = app.put("/items/0", json!({"name": "Updated", "quantity": 10})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "item updated", "index": 0, "item": {"name": "Updated", "quantity": 10}})
    );
    assert_eq!(
        app.stored().await,
        vec![Item::new("Updated", 10), Item::new("Bananas", 5)]
    );
}

#[tokio::test]
async fn update_out_of_range_is_not_found() {
    let app = TestApp::new();
    app.post("/items", json!({"name": "Apples", "quantity": 3})).await;

    for uri in ["/items/1", "/items/99", "/items/-1", "/items/99999999999999999999"] {
        let (status, body) = app.put(uri, json!({"name": "X", "quantity": 1})).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({"detail": "Item not found"}));
    }
    assert_eq!(app.stored().await, vec![Item::new("Apples", 3)]);
}

#[tokio::test]
async fn update_on_empty_store_is_not_found() {
    let app = TestApp::new();
    let (status, body) = app.put("/items/3", json!({"name": "Test", "quantity": 1})).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Item not found"}));
}

#[tokio::test]
async fn invalid_update_body_is_bad_request_even_for_missing_index() {
    let app = TestApp::new();
    app.post("/items", json!({"name": "Apples", "quantity": 3})).await;

    let cases = [
        ("/items/0", json!({"quantity": 5})),
        ("/items/0", json!({"name": "", "quantity": 3})),
        ("/items/0", json!({"name": "Apples", "quantity": 0})),
        ("/items/99", json!({"name": "", "quantity": 3})),
        ("/items/-1", json!({"name": "X"})),
    ];

    for (uri, payload) in cases {
        let (status, _) = app.put(uri, payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }
    assert_eq!(app.stored().await, vec![Item::new("Apples", 3)]);
}

#[tokio::test]
async fn update_rule_messages_match_create() {
    let app = TestApp::new();
    app.post("/items", json!({"name": "Apples", "quantity": 3})).await;

    let (_, body) = app.put("/items/0", json!({"name": "", "quantity": 3})).await;
    assert_eq!(body["detail"], "Name must not be empty");

    let (_, body) = app.put("/items/0", json!({"name": "Apples", "quantity": 0})).await;
    assert_eq!(body["detail"], "Quantity must be >= 1");
}

#[tokio::test]
async fn simulate_error_always_fails() {
    let app = TestApp::new();
    app.post("/items", json!({"name": "Apples", "quantity": 3})).await;

    for _ in 0..2 {
        let (status, body) = app.get("/simulate-error").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"detail": "Simulated internal server error"}));
    }
    assert_eq!(app.stored().await.len(), 1);
}
