//! API integration tests
//!
//! These run against a live server (`cargo run`) with a clean database.
//! Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE_URL: &str = "http://localhost:4000";

/// Unique suffix so repeated runs do not collide on unique columns
fn unique() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos()
}

async fn create_author(client: &Client) -> i64 {
    let response = client
        .post(format!("{}/author", BASE_URL))
        .json(&json!({
            "first_name": "Ursula",
            "last_name": "Le Guin"
        }))
        .send()
        .await
        .expect("Failed to create author");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse author");
    body["id"].as_i64().expect("No author id")
}

async fn create_book(client: &Client, author_id: i64, stock: i64) -> i64 {
    let response = client
        .post(format!("{}/book", BASE_URL))
        .json(&json!({
            "title": "The Dispossessed",
            "author": author_id,
            "stock": stock,
            "fiction": true,
            "genre": "science fiction"
        }))
        .send()
        .await
        .expect("Failed to create book");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse book");
    body["id"].as_i64().expect("No book id")
}

async fn create_customer(client: &Client, balance_due: f64) -> i64 {
    let response = client
        .post(format!("{}/customer", BASE_URL))
        .json(&json!({
            "first_name": "Shevek",
            "last_name": "Anarres",
            "email_address": format!("shevek+{}@anarres.example", unique()),
            "balance_due": balance_due
        }))
        .send()
        .await
        .expect("Failed to create customer");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse customer");
    body["id"].as_i64().expect("No customer id")
}

async fn get_json(client: &Client, path: &str) -> Value {
    let response = client
        .get(format!("{}{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/admin", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["serverResp"], "running");
}

#[tokio::test]
#[ignore]
async fn test_checkout_and_return_round_trip() {
    let client = Client::new();

    let author_id = create_author(&client).await;
    let book_id = create_book(&client, author_id, 1).await;
    let customer_id = create_customer(&client, 0.0).await;
    let other_customer_id = create_customer(&client, 0.0).await;

    // Check the only copy out
    let response = client
        .post(format!("{}/book/checkout", BASE_URL))
        .json(&json!({ "book": book_id, "customer": customer_id }))
        .send()
        .await
        .expect("Failed to send checkout");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse checkout");
    assert_eq!(body["message"], "Success");

    let book = get_json(&client, &format!("/book/{}", book_id)).await;
    assert_eq!(book["available"], 0);
    assert_eq!(book["stock"], 1);

    let customer = get_json(&client, &format!("/customer/{}", customer_id)).await;
    assert_eq!(customer["checked_out"], json!([book_id]));

    // No copies left for anyone else
    let response = client
        .post(format!("{}/book/checkout", BASE_URL))
        .json(&json!({ "book": book_id, "customer": other_customer_id }))
        .send()
        .await
        .expect("Failed to send second checkout");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse conflict");
    assert_eq!(body["message"], "No books available for checkout");

    // Return restores the pre-checkout state
    let response = client
        .post(format!("{}/book/return", BASE_URL))
        .json(&json!({ "book": book_id, "customer": customer_id }))
        .send()
        .await
        .expect("Failed to send return");

    assert_eq!(response.status(), 200);

    let book = get_json(&client, &format!("/book/{}", book_id)).await;
    assert_eq!(book["available"], 1);

    let customer = get_json(&client, &format!("/customer/{}", customer_id)).await;
    assert_eq!(customer["checked_out"], json!([]));
}

#[tokio::test]
#[ignore]
async fn test_checkout_blocked_over_credit_limit() {
    let client = Client::new();

    let author_id = create_author(&client).await;
    let book_id = create_book(&client, author_id, 3).await;
    let customer_id = create_customer(&client, 150.0).await;

    let response = client
        .post(format!("{}/book/checkout", BASE_URL))
        .json(&json!({ "book": book_id, "customer": customer_id }))
        .send()
        .await
        .expect("Failed to send checkout");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("not in good standing"));

    // Plenty of stock, but the balance alone blocks the checkout
    let book = get_json(&client, &format!("/book/{}", book_id)).await;
    assert_eq!(book["available"], 3);
}

#[tokio::test]
#[ignore]
async fn test_checkout_missing_fields() {
    let client = Client::new();

    let response = client
        .post(format!("{}/book/checkout", BASE_URL))
        .json(&json!({ "customer": 1 }))
        .send()
        .await
        .expect("Failed to send checkout");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "No book provided");

    let response = client
        .post(format!("{}/book/checkout", BASE_URL))
        .json(&json!({ "book": 1 }))
        .send()
        .await
        .expect("Failed to send checkout");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "No customer provided");
}

#[tokio::test]
#[ignore]
async fn test_checkout_unknown_book_is_404() {
    let client = Client::new();
    let customer_id = create_customer(&client, 0.0).await;

    let response = client
        .post(format!("{}/book/checkout", BASE_URL))
        .json(&json!({ "book": 99999999, "customer": customer_id }))
        .send()
        .await
        .expect("Failed to send checkout");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_return_without_checkout_is_invalid() {
    let client = Client::new();

    let author_id = create_author(&client).await;
    let book_id = create_book(&client, author_id, 2).await;
    let customer_id = create_customer(&client, 0.0).await;

    let response = client
        .post(format!("{}/book/return", BASE_URL))
        .json(&json!({ "book": book_id, "customer": customer_id }))
        .send()
        .await
        .expect("Failed to send return");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book not checked out by this customer");
}

#[tokio::test]
#[ignore]
async fn test_book_lifecycle_updates_author_list() {
    let client = Client::new();

    let author_id = create_author(&client).await;
    let book_id = create_book(&client, author_id, 1).await;

    let author = get_json(&client, &format!("/author/{}", author_id)).await;
    assert!(author["books"]
        .as_array()
        .unwrap()
        .contains(&json!(book_id)));

    let response = client
        .delete(format!("{}/book/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to delete book");

    assert_eq!(response.status(), 200);

    let author = get_json(&client, &format!("/author/{}", author_id)).await;
    assert!(!author["books"]
        .as_array()
        .unwrap()
        .contains(&json!(book_id)));
}

#[tokio::test]
#[ignore]
async fn test_delete_author_with_books_reports_orphans() {
    let client = Client::new();

    let author_id = create_author(&client).await;
    let first_book = create_book(&client, author_id, 1).await;
    let second_book = create_book(&client, author_id, 1).await;

    let response = client
        .delete(format!("{}/author/{}", BASE_URL, author_id))
        .send()
        .await
        .expect("Failed to delete author");

    assert_eq!(response.status(), 202);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["bookList"], json!([first_book, second_book]));
}

#[tokio::test]
#[ignore]
async fn test_delete_author_without_books() {
    let client = Client::new();

    let author_id = create_author(&client).await;

    let response = client
        .delete(format!("{}/author/{}", BASE_URL, author_id))
        .send()
        .await
        .expect("Failed to delete author");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Success");
    assert!(body.get("bookList").is_none());
}

#[tokio::test]
#[ignore]
async fn test_employee_login_and_protected_routes() {
    let client = Client::new();
    let username = format!("clerk{}", unique());

    // Register
    let response = client
        .post(format!("{}/employee", BASE_URL))
        .json(&json!({
            "username": username,
            "password": "correct-horse",
            "first_name": "Genly",
            "last_name": "Ai"
        }))
        .send()
        .await
        .expect("Failed to create employee");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse employee");
    let employee_id = body["id"].as_i64().expect("No employee id");
    // Password hashes never leave the server
    assert!(body.get("password").is_none());

    // Wrong password
    let response = client
        .post(format!("{}/employee/login", BASE_URL))
        .json(&json!({ "username": username, "password": "wrong" }))
        .send()
        .await
        .expect("Failed to send login");

    assert_eq!(response.status(), 401);

    // Correct password
    let response = client
        .post(format!("{}/employee/login", BASE_URL))
        .json(&json!({ "username": username, "password": "correct-horse" }))
        .send()
        .await
        .expect("Failed to send login");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse login");
    let token = body["token"].as_str().expect("No token").to_string();
    assert_eq!(body["user"]["username"], json!(username));

    // Protected route without a token
    let response = client
        .get(format!("{}/employee/{}", BASE_URL, employee_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 403);

    // Same route with the token
    let response = client
        .get(format!("{}/employee/{}", BASE_URL, employee_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
}

#[tokio::test]
#[ignore]
async fn test_login_missing_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/employee/login", BASE_URL))
        .json(&json!({ "username": "someone" }))
        .send()
        .await
        .expect("Failed to send login");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Missing username or password");
}

#[tokio::test]
#[ignore]
async fn test_customer_delete_blocked_while_books_out() {
    let client = Client::new();

    let author_id = create_author(&client).await;
    let book_id = create_book(&client, author_id, 1).await;
    let customer_id = create_customer(&client, 0.0).await;

    let response = client
        .post(format!("{}/book/checkout", BASE_URL))
        .json(&json!({ "book": book_id, "customer": customer_id }))
        .send()
        .await
        .expect("Failed to send checkout");
    assert_eq!(response.status(), 200);

    let response = client
        .delete(format!("{}/customer/{}", BASE_URL, customer_id))
        .send()
        .await
        .expect("Failed to send delete");

    assert_eq!(response.status(), 400);

    // Returning the book unblocks the delete
    let response = client
        .post(format!("{}/book/return", BASE_URL))
        .json(&json!({ "book": book_id, "customer": customer_id }))
        .send()
        .await
        .expect("Failed to send return");
    assert_eq!(response.status(), 200);

    let response = client
        .delete(format!("{}/customer/{}", BASE_URL, customer_id))
        .send()
        .await
        .expect("Failed to send delete");

    assert_eq!(response.status(), 200);
}
