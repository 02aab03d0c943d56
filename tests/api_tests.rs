//! API integration tests
//!
//! These run against a live server (with MONGODB_URI pointing at a test
//! database). Start the server, then: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE_URL: &str = "http://localhost:5000";

/// Unique suffix so repeated runs don't collide on usernames/book names
fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos()
}

async fn create_user(client: &Client, name: &str, email: &str, username: &str) -> Value {
    let response = client
        .post(format!("{}/api/users", BASE_URL))
        .json(&json!({ "name": name, "email": email, "username": username }))
        .send()
        .await
        .expect("Failed to send create user request");

    assert!(response.status().is_success());
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
    assert!(body["database"].as_str().is_some_and(|db| !db.is_empty()));
}

#[tokio::test]
#[ignore]
async fn test_create_user_then_list_includes_it() {
    let client = Client::new();
    let username = format!("ada-{}", unique_suffix());

    let ack = create_user(&client, "Ada Lovelace", "ada@example.org", &username).await;
    assert_eq!(ack["acknowledged"], json!(true));
    assert_eq!(ack["insertedId"].as_str().expect("no insertedId").len(), 24);

    let response = client
        .get(format!("{}/api/users", BASE_URL))
        .send()
        .await
        .expect("Failed to send list request");
    assert!(response.status().is_success());

    let users: Vec<Value> = response.json().await.expect("Failed to parse list");
    let created = users
        .iter()
        .find(|u| u["username"] == json!(username.as_str()))
        .expect("created user not in list");
    assert_eq!(created["_id"], ack["insertedId"]);
    assert_eq!(created["name"], "Ada Lovelace");
}

#[tokio::test]
#[ignore]
async fn test_update_user_missing_field_is_400_and_leaves_document_unchanged() {
    let client = Client::new();
    let username = format!("grace-{}", unique_suffix());

    let ack = create_user(&client, "Grace Hopper", "grace@example.org", &username).await;
    let id = ack["insertedId"].as_str().expect("no insertedId");

    // email missing
    let response = client
        .put(format!("{}/api/users/{}", BASE_URL, id))
        .json(&json!({ "name": "Grace B. Hopper", "username": username }))
        .send()
        .await
        .expect("Failed to send update request");
    assert_eq!(response.status(), 400);

    let users: Vec<Value> = client
        .get(format!("{}/api/users", BASE_URL))
        .send()
        .await
        .expect("Failed to send list request")
        .json()
        .await
        .expect("Failed to parse list");
    let stored = users
        .iter()
        .find(|u| u["_id"] == json!(id))
        .expect("user disappeared");
    assert_eq!(stored["name"], "Grace Hopper");
}

#[tokio::test]
#[ignore]
async fn test_update_unknown_user_is_404() {
    let client = Client::new();

    let response = client
        .put(format!("{}/api/users/ffffffffffffffffffffffff", BASE_URL))
        .json(&json!({
            "name": "Nobody",
            "email": "nobody@example.org",
            "username": "nobody"
        }))
        .send()
        .await
        .expect("Failed to send update request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_update_user_ignores_client_supplied_id() {
    let client = Client::new();
    let username = format!("linus-{}", unique_suffix());

    let ack = create_user(&client, "Linus", "linus@example.org", &username).await;
    let id = ack["insertedId"].as_str().expect("no insertedId");

    let response = client
        .put(format!("{}/api/users/{}", BASE_URL, id))
        .json(&json!({
            "_id": "000000000000000000000000",
            "name": "Linus T.",
            "email": "linus@example.org",
            "username": username
        }))
        .send()
        .await
        .expect("Failed to send update request");
    assert!(response.status().is_success());

    let users: Vec<Value> = client
        .get(format!("{}/api/users", BASE_URL))
        .send()
        .await
        .expect("Failed to send list request")
        .json()
        .await
        .expect("Failed to parse list");
    let stored = users
        .iter()
        .find(|u| u["_id"] == json!(id))
        .expect("identifier changed");
    assert_eq!(stored["name"], "Linus T.");
}

#[tokio::test]
#[ignore]
async fn test_malformed_user_id_is_500() {
    let client = Client::new();

    let response = client
        .put(format!("{}/api/users/not-a-hex-id", BASE_URL))
        .json(&json!({
            "name": "Nobody",
            "email": "nobody@example.org",
            "username": "nobody"
        }))
        .send()
        .await
        .expect("Failed to send update request");

    assert_eq!(response.status(), 500);
}

#[tokio::test]
#[ignore]
async fn test_delete_user_acknowledges_even_when_nothing_matched() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/api/users/ffffffffffffffffffffffff", BASE_URL))
        .send()
        .await
        .expect("Failed to send delete request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["acknowledged"], json!(true));
    assert_eq!(body["deletedCount"], json!(0));
}

#[tokio::test]
#[ignore]
async fn test_create_book_applies_defaults() {
    let client = Client::new();
    let name = format!("Dune {}", unique_suffix());

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "name": name, "type": "Novel", "language": "English" }))
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), 201);
    let book: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(book["availability"], "Available");
    assert_eq!(book["quantity"], 1);
    assert_eq!(book["_id"].as_str().expect("no _id").len(), 24);
}

#[tokio::test]
#[ignore]
async fn test_create_book_round_trips_all_fields() {
    let client = Client::new();
    let name = format!("Le Petit Prince {}", unique_suffix());
    let body = json!({
        "name": name,
        "type": "Novel",
        "language": "French",
        "availability": "Borrowed",
        "quantity": 3
    });

    let created: Value = client
        .post(format!("{}/books", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send create request")
        .json()
        .await
        .expect("Failed to parse response");

    let books: Vec<Value> = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send list request")
        .json()
        .await
        .expect("Failed to parse list");
    let fetched = books
        .iter()
        .find(|b| b["_id"] == created["_id"])
        .expect("created book not in list");

    for field in ["name", "type", "language", "availability", "quantity"] {
        assert_eq!(fetched[field], body[field], "field {} differs", field);
    }
}

#[tokio::test]
#[ignore]
async fn test_update_book_merges_named_fields() {
    let client = Client::new();
    let name = format!("Foundation {}", unique_suffix());

    let created: Value = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "name": name, "type": "Novel", "language": "English" }))
        .send()
        .await
        .expect("Failed to send create request")
        .json()
        .await
        .expect("Failed to parse response");
    let id = created["_id"].as_str().expect("no _id");

    let response = client
        .put(format!("{}/books/{}", BASE_URL, id))
        .json(&json!({
            "name": name,
            "type": "Novel",
            "language": "English",
            "availability": "Borrowed",
            "quantity": 2
        }))
        .send()
        .await
        .expect("Failed to send update request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book updated successfully");
}

#[tokio::test]
#[ignore]
async fn test_delete_book_twice_is_404() {
    let client = Client::new();
    let name = format!("Ephemeral {}", unique_suffix());

    let created: Value = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "name": name, "type": "Novel", "language": "English" }))
        .send()
        .await
        .expect("Failed to send create request")
        .json()
        .await
        .expect("Failed to parse response");
    let id = created["_id"].as_str().expect("no _id");

    let first = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send delete request");
    assert_eq!(first.status(), 204);

    let second = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send delete request");
    assert_eq!(second.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_malformed_book_id_is_400() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/books/not-a-hex-id", BASE_URL))
        .send()
        .await
        .expect("Failed to send delete request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_dashboard_stats_counters_are_coherent() {
    let client = Client::new();

    let stats: Value = client
        .get(format!("{}/dashboard/stats", BASE_URL))
        .send()
        .await
        .expect("Failed to send stats request")
        .json()
        .await
        .expect("Failed to parse stats");

    let book_count = stats["bookCount"].as_u64().expect("no bookCount");
    let borrowed = stats["borrowedBooks"].as_u64().expect("no borrowedBooks");
    let returned = stats["returnedBooks"].as_u64().expect("no returnedBooks");
    assert!(stats["userCount"].is_u64());
    assert!(borrowed + returned <= book_count);
}

#[tokio::test]
#[ignore]
async fn test_overdue_records_are_past_due_and_unreturned() {
    let client = Client::new();
    let now = chrono::Utc::now();

    let overdue: Vec<Value> = client
        .get(format!("{}/dashboard/overdue", BASE_URL))
        .send()
        .await
        .expect("Failed to send overdue request")
        .json()
        .await
        .expect("Failed to parse overdue list");

    for record in &overdue {
        assert_eq!(record["returned"], json!(false));
        let due: chrono::DateTime<chrono::Utc> = record["dueDate"]
            .as_str()
            .expect("no dueDate")
            .parse()
            .expect("dueDate not RFC 3339");
        assert!(due < now);
        assert!(record["name"].is_string());
    }
}

#[tokio::test]
#[ignore]
async fn test_admin_list_has_two_valued_status() {
    let client = Client::new();

    let admins: Vec<Value> = client
        .get(format!("{}/dashboard/admins", BASE_URL))
        .send()
        .await
        .expect("Failed to send admins request")
        .json()
        .await
        .expect("Failed to parse admin list");

    for admin in &admins {
        assert!(admin["name"].is_string());
        let status = admin["status"].as_str().expect("no status");
        assert!(status == "Active" || status == "Inactive");
    }
}
