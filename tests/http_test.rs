use axum::body::{to_bytes, Body};
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use smart_canteen::config::{AdminSeed, Config};
use smart_canteen::http::{router, AppState};
use smart_canteen::lifecycle::CanteenSystem;
use tower::ServiceExt;

async fn app() -> Router {
    let config = Config {
        admin: Some(AdminSeed {
            email: "admin@school.edu".to_string(),
            password: "hunter2".to_string(),
        }),
        ..Config::default()
    };
    let system = CanteenSystem::start(&config).await.unwrap();
    router(AppState::from_system(&system))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(match body {
            Some(json) => Body::from(json.to_string()),
            None => Body::empty(),
        })
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn add_item(app: &Router, name: &str, price: u32, count: u32) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/menu",
        Some(json!({ "name": name, "price": price, "category": "Meals", "count": count })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["insertedId"].as_str().unwrap().to_string()
}

fn order_body(id: &str, name: &str, price: u32, quantity: u32) -> Value {
    json!({
        "studentName": "Asha",
        "rollNumber": "21CS042",
        "cart": [{ "item": { "_id": id, "name": name, "price": price }, "quantity": quantity }],
        "totalPrice": price * quantity
    })
}

async fn place(
    app: &Router,
    id: &str,
    name: &str,
    price: u32,
    quantity: u32,
) -> (StatusCode, Value) {
    let body = order_body(id, name, price, quantity);
    send(app, Method::POST, "/api/orders", Some(body)).await
}

#[tokio::test]
async fn test_menu_crud() {
    let app = app().await;
    let id = add_item(&app, "Dosa", 40, 5).await;

    let (status, menu) = send(&app, Method::GET, "/api/menu", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(menu[0]["id"], json!(id));
    assert_eq!(menu[0]["count"], json!(5));
    assert_eq!(menu[0]["inStock"], json!(true));

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/menu?id={id}"),
        Some(json!({ "name": "Dosa", "price": 45, "category": "Meals", "count": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, menu) = send(&app, Method::GET, "/api/menu", None).await;
    assert_eq!(menu[0]["inStock"], json!(false));
    assert_eq!(menu[0]["price"].as_f64(), Some(45.0));

    let (status, body) = send(&app, Method::DELETE, "/api/menu", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Missing id"));

    let (status, _) = send(&app, Method::DELETE, &format!("/api/menu?id={id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::DELETE, &format!("/api/menu?id={id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_menu_item_is_bad_request() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/menu",
        Some(json!({ "name": "", "price": 10, "category": "Meals", "count": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_place_order_statuses() {
    let app = app().await;
    let id = add_item(&app, "Samosa", 15, 5).await;

    let (status, body) = place(&app, &id, "Samosa", 15, 5).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert!(body["orderId"].is_string());

    let (_, menu) = send(&app, Method::GET, "/api/menu", None).await;
    assert_eq!(menu[0]["count"], json!(0));
    assert_eq!(menu[0]["inStock"], json!(false));

    let (status, body) = place(&app, &id, "Samosa", 15, 1).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["message"].as_str().unwrap().contains("Samosa"));

    let (status, _) = place(&app, "item_404", "Ghost", 15, 1).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/orders",
        Some(json!({ "studentName": "Asha", "cart": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = app().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/orders")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_order_status_updates() {
    let app = app().await;
    let id = add_item(&app, "Chai", 10, 5).await;
    let (_, body) = place(&app, &id, "Chai", 10, 1).await;
    let order_id = body["orderId"].as_str().unwrap().to_string();
    let uri = format!("/api/orders/{order_id}");

    let (status, order) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["status"], json!("Placed"));
    assert_eq!(order["items"][0]["itemId"], json!(id));

    let complete = json!({ "status": "Completed" });
    let (status, body) = send(&app, Method::PUT, &uri, Some(complete.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["changed"], json!(true));

    let (status, body) = send(&app, Method::PUT, &uri, Some(complete)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["changed"], json!(false));

    for bad in [json!({ "status": "Placed" }), json!({ "status": "Cancelled" }), json!({})] {
        let (status, _) = send(&app, Method::PUT, &uri, Some(bad)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/orders/order_999",
        Some(json!({ "status": "Completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_my_orders() {
    let app = app().await;
    let id = add_item(&app, "Poha", 25, 5).await;
    place(&app, &id, "Poha", 25, 2).await;

    let (status, orders) = send(
        &app,
        Method::POST,
        "/api/my-orders",
        Some(json!({ "studentName": "Asha", "rollNumber": "21CS042" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orders.as_array().unwrap().len(), 1);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/my-orders",
        Some(json!({ "studentName": "Asha", "rollNumber": "nope" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::POST, "/api/my-orders", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analytics_counts_completed_revenue_only() {
    let app = app().await;
    let thali = add_item(&app, "Thali", 100, 10).await;
    let wrap = add_item(&app, "Wrap", 50, 10).await;
    let biryani = add_item(&app, "Biryani", 200, 10).await;

    let mut completed = Vec::new();
    for (id, name, price, quantity) in [(&thali, "Thali", 100, 1), (&wrap, "Wrap", 50, 3)] {
        let (_, body) = place(&app, id, name, price, quantity).await;
        completed.push(body["orderId"].as_str().unwrap().to_string());
    }
    place(&app, &biryani, "Biryani", 200, 1).await;
    for order_id in &completed {
        let (status, _) = send(
            &app,
            Method::PUT,
            &format!("/api/orders/{order_id}"),
            Some(json!({ "status": "Completed" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, summary) = send(&app, Method::GET, "/api/analytics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["totalRevenueToday"].as_f64(), Some(250.0));
    assert_eq!(summary["totalOrdersToday"], json!(3));
    assert_eq!(summary["topSellingItem"]["name"], json!("Wrap"));
    assert_eq!(summary["topSellingItem"]["quantity"], json!(3));
    assert_eq!(summary["mostProfitableItem"]["name"], json!("Biryani"));
    assert_eq!(summary["mostProfitableItem"]["revenue"].as_f64(), Some(200.0));
}

#[tokio::test]
async fn test_analytics_with_no_orders() {
    let app = app().await;
    let (status, summary) = send(&app, Method::GET, "/api/analytics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["totalRevenueToday"].as_f64(), Some(0.0));
    assert_eq!(summary["totalOrdersToday"], json!(0));
    assert!(summary["topSellingItem"].is_null());
    assert!(summary["mostProfitableItem"].is_null());
}

#[tokio::test]
async fn test_admin_login() {
    let app = app().await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        Some(json!({ "email": "admin@school.edu", "password": "hunter2" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        Some(json!({ "email": "admin@school.edu", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], json!("Invalid credentials"));
}
