//! HTTP tests for /api/customers

mod common;

use common::*;
use http::{StatusCode, header};
use menu_server::ErrorCode;
use serde_json::{Value, json};

fn ana(email: &str) -> Value {
    json!({
        "firstName": "Ana",
        "lastName": "Lopez",
        "email": email,
        "marketingOptIn": false
    })
}

async fn create_customer(app: &axum::Router, body: Value) -> Value {
    let response = send_json(app, "POST", "/api/customers", &body).await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.json());
    response.json()
}

#[tokio::test]
async fn test_create_and_fetch() {
    let app = app().await;
    let response = send_json(&app, "POST", "/api/customers", &ana("ana@example.com")).await;
    assert_eq!(response.status, StatusCode::CREATED);

    let customer = response.json();
    let id = customer["customerId"].as_i64().unwrap();
    assert_eq!(
        response.headers[header::LOCATION],
        format!("/api/customers/{id}").as_str()
    );
    assert_eq!(customer["loyaltyPoints"], 0);
    assert!(customer["joinDate"].as_i64().unwrap() > 0);

    let by_id = get(&app, &format!("/api/customers/{id}")).await;
    assert_eq!(by_id.json(), customer);

    let by_email = get(&app, "/api/customers/email/ana@example.com").await;
    assert_eq!(by_email.status, StatusCode::OK);
    assert_eq!(by_email.json(), customer);

    let list = get(&app, "/api/customers").await.json();
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_rejections() {
    let app = app().await;

    let response = send_raw_json(&app, "POST", "/api/customers", "null".into()).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Customer is null");

    let response = send_json(&app, "POST", "/api/customers", &ana("no-at-sign")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    create_customer(&app, ana("ana@example.com")).await;
    let response = send_json(&app, "POST", "/api/customers", &ana("ANA@example.com")).await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        response.message(),
        "Customer with email ANA@example.com already exists"
    );
}

#[tokio::test]
async fn test_missing_customer() {
    let app = app().await;
    let response = get(&app, "/api/customers/42").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "Customer with ID 42 not found");

    let response = get(&app, "/api/customers/email/nobody@example.com").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = delete(&app, "/api/customers/42").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = get(&app, "/api/customers/42/loyalty").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = post_empty(&app, "/api/customers/42/loyalty/add/5").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_overwrites() {
    let app = app().await;
    let customer = create_customer(&app, ana("ana@example.com")).await;
    let id = customer["customerId"].as_i64().unwrap();

    let mut body = ana("ana.lopez@example.com");
    body["customerId"] = json!(id + 1);
    let response = send_json(&app, "PUT", &format!("/api/customers/{id}"), &body).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Customer ID mismatch");

    body["customerId"] = json!(id);
    body["phone"] = json!("555-0100");
    body["loyaltyPoints"] = json!(40);
    let response = send_json(&app, "PUT", &format!("/api/customers/{id}"), &body).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.body.is_empty());

    let stored = get(&app, &format!("/api/customers/{id}")).await.json();
    assert_eq!(stored["email"], "ana.lopez@example.com");
    assert_eq!(stored["phone"], "555-0100");
    assert_eq!(stored["loyaltyPoints"], 40);

    let mut ghost = ana("ghost@example.com");
    ghost["customerId"] = json!(999);
    let response = send_json(&app, "PUT", "/api/customers/999", &ghost).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_loyalty_points() {
    let app = app().await;
    let customer = create_customer(&app, ana("ana@example.com")).await;
    let id = customer["customerId"].as_i64().unwrap();
    let loyalty_uri = format!("/api/customers/{id}/loyalty");

    assert_eq!(get(&app, &loyalty_uri).await.json(), json!(0));

    let response = post_empty(&app, &format!("{loyalty_uri}/add/30")).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    let response = post_empty(&app, &format!("{loyalty_uri}/add/12")).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    assert_eq!(get(&app, &loyalty_uri).await.json(), json!(42));

    let response = post_empty(&app, &format!("{loyalty_uri}/add/lots")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let response = post_empty(&app, &format!("{loyalty_uri}/add/99999999999")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_loyalty_points_overflow() {
    let app = app().await;
    let mut body = ana("ana@example.com");
    body["loyaltyPoints"] = json!(i64::MAX - 5);
    let customer = create_customer(&app, body).await;
    let id = customer["customerId"].as_i64().unwrap();
    let loyalty_uri = format!("/api/customers/{id}/loyalty");

    let response = post_empty(&app, &format!("{loyalty_uri}/add/10")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], ErrorCode::ValueOutOfRange.code());

    assert_eq!(get(&app, &loyalty_uri).await.json(), json!(i64::MAX - 5));
    let stored = get(&app, &format!("/api/customers/{id}")).await.json();
    assert_eq!(stored["loyaltyPoints"], json!(i64::MAX - 5));
}

#[tokio::test]
async fn test_delete() {
    let app = app().await;
    let customer = create_customer(&app, ana("ana@example.com")).await;
    let id = customer["customerId"].as_i64().unwrap();

    let response = delete(&app, &format!("/api/customers/{id}")).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(
        get(&app, &format!("/api/customers/{id}")).await.status,
        StatusCode::NOT_FOUND
    );

    // email is free again
    create_customer(&app, ana("ana@example.com")).await;
}
