//! API integration tests
//!
//! Run against a live server with a migrated database:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:3000";

fn unique(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{} {}", prefix, nanos)
}

/// Create the lookup rows a book needs and return their ids
async fn setup_lookups(client: &Client) -> (i64, i64, i64) {
    let category: Value = client
        .post(format!("{}/categories", BASE_URL))
        .json(&json!({ "description": unique("Fiction") }))
        .send()
        .await
        .expect("Failed to create category")
        .json()
        .await
        .expect("Failed to parse category");

    let publisher: Value = client
        .post(format!("{}/publishers", BASE_URL))
        .json(&json!({ "name": unique("Ace Books") }))
        .send()
        .await
        .expect("Failed to create publisher")
        .json()
        .await
        .expect("Failed to parse publisher");

    let format: Value = client
        .post(format!("{}/formats", BASE_URL))
        .json(&json!({ "description": unique("Hardcover") }))
        .send()
        .await
        .expect("Failed to create format")
        .json()
        .await
        .expect("Failed to parse format");

    (
        category["id"].as_i64().expect("No category id"),
        publisher["id"].as_i64().expect("No publisher id"),
        format["id"].as_i64().expect("No format id"),
    )
}

fn book_body(title: &str, cat: i64, publ: i64, fmt: i64) -> Value {
    json!({
        "title": title,
        "author": "Frank Herbert",
        "publication_year": 1965,
        "pages": 412,
        "value": "29.90",
        "category_id": cat,
        "publisher_id": publ,
        "format_id": fmt
    })
}

async fn create_book(client: &Client, title: &str, cat: i64, publ: i64, fmt: i64) -> Value {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&book_body(title, cat, publ, fmt))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse book")
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
}

#[tokio::test]
#[ignore]
async fn test_readiness_reports_database() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    // With the database up the probe answers 200; a broken pool gives 503
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_create_book_missing_field_names_it() {
    let client = Client::new();
    let (cat, publ, fmt) = setup_lookups(&client).await;

    let mut body = book_body(&unique("Dune"), cat, publ, fmt);
    body.as_object_mut().unwrap().remove("author");

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "The attribute \"author\" is required.");
}

#[tokio::test]
#[ignore]
async fn test_create_book_negative_value() {
    let client = Client::new();
    let (cat, publ, fmt) = setup_lookups(&client).await;

    let mut body = book_body(&unique("Dune"), cat, publ, fmt);
    body["value"] = json!("-1.00");

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "The value cannot be negative!");
}

#[tokio::test]
#[ignore]
async fn test_duplicate_title_rejected_but_own_title_update_succeeds() {
    let client = Client::new();
    let (cat, publ, fmt) = setup_lookups(&client).await;
    let title = unique("Dune");

    let book = create_book(&client, &title, cat, publ, fmt).await;
    let id = book["id"].as_i64().expect("No book id");

    // Second create with the same title fails
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&book_body(&title, cat, publ, fmt))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["error"],
        format!("The book \"{}\" is already registered.", title)
    );

    // Updating the book keeping its own title succeeds
    let response = client
        .put(format!("{}/books/{}", BASE_URL, id))
        .json(&book_body(&title, cat, publ, fmt))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    // Cleanup
    let _ = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_list_books_pagination() {
    let client = Client::new();
    let (cat, publ, fmt) = setup_lookups(&client).await;

    let mut ids = Vec::new();
    for i in 0..3 {
        let book = create_book(&client, &unique(&format!("Paged {}", i)), cat, publ, fmt).await;
        ids.push(book["id"].as_i64().unwrap());
    }

    let response = client
        .get(format!("{}/books?limit=2&page=1", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let list = body.as_array().expect("Expected a JSON array");
    assert!(list.len() <= 2);

    for id in ids {
        let _ = client
            .delete(format!("{}/books/{}", BASE_URL, id))
            .send()
            .await;
    }
}

#[tokio::test]
#[ignore]
async fn test_delete_book_logs_once_and_removes_record() {
    let client = Client::new();
    let (cat, publ, fmt) = setup_lookups(&client).await;
    let title = unique("Ephemeral");

    let book = create_book(&client, &title, cat, publ, fmt).await;
    let id = book["id"].as_i64().expect("No book id");

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    // Exactly one deletion entry names this book (titles are unique per run)
    let logs: Value = client
        .get(format!("{}/logs?limit=1000", BASE_URL))
        .send()
        .await
        .expect("Failed to list logs")
        .json()
        .await
        .expect("Failed to parse logs");
    let deleted_action = format!("Book: {} deleted.", title);
    let matches = logs
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["action"] == deleted_action.as_str())
        .count();
    assert_eq!(matches, 1);

    // The record is gone from lists and detail lookups
    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_filter_books_by_title_case_insensitive() {
    let client = Client::new();
    let (cat, publ, fmt) = setup_lookups(&client).await;
    let title = unique("UnMisTakAble Needle");

    let book = create_book(&client, &title, cat, publ, fmt).await;
    let id = book["id"].as_i64().expect("No book id");

    let response = client
        .get(format!("{}/books?title=unmistakable", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let list = body.as_array().expect("Expected a JSON array");
    assert!(!list.is_empty());
    assert!(list
        .iter()
        .all(|b| b["title"].as_str().unwrap().to_lowercase().contains("unmistakable")));

    let _ = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_filter_title_wildcards_match_literally() {
    let client = Client::new();
    let (cat, publ, fmt) = setup_lookups(&client).await;

    let percent_title = unique("Made of 100% Paper");
    let plain_title = unique("Made of 100 Sheets of Paper");
    let with_percent = create_book(&client, &percent_title, cat, publ, fmt).await;
    let without = create_book(&client, &plain_title, cat, publ, fmt).await;

    let response = client
        .get(format!("{}/books", BASE_URL))
        .query(&[("title", "100% Paper")])
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let titles: Vec<&str> = body
        .as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();

    // "%" matches itself, not any run of characters
    assert!(titles.contains(&percent_title.as_str()));
    assert!(!titles.contains(&plain_title.as_str()));

    for book in [&with_percent, &without] {
        let _ = client
            .delete(format!("{}/books/{}", BASE_URL, book["id"].as_i64().unwrap()))
            .send()
            .await;
    }
}

#[tokio::test]
#[ignore]
async fn test_get_missing_book_is_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/999999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_category_crud() {
    let client = Client::new();

    // Missing description is rejected by name
    let response = client
        .post(format!("{}/categories", BASE_URL))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "The attribute \"description\" is required.");

    // Create, update, delete
    let created: Value = client
        .post(format!("{}/categories", BASE_URL))
        .json(&json!({ "description": unique("Sci-fi") }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let id = created["id"].as_i64().expect("No category id");

    let response = client
        .put(format!("{}/categories/{}", BASE_URL, id))
        .json(&json!({ "description": unique("Science fiction") }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .delete(format!("{}/categories/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_list_states_seeded() {
    let client = Client::new();

    let response = client
        .get(format!("{}/states", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(!body.as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore]
async fn test_city_crud_with_state() {
    let client = Client::new();

    let states: Value = client
        .get(format!("{}/states", BASE_URL))
        .send()
        .await
        .expect("Failed to list states")
        .json()
        .await
        .expect("Failed to parse states");
    let state_id = states[0]["id"].as_i64().expect("No state id");

    let created: Value = client
        .post(format!("{}/cities", BASE_URL))
        .json(&json!({ "name": unique("Springfield"), "state_id": state_id }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let id = created["id"].as_i64().expect("No city id");
    assert!(created["state_name"].is_string());

    let response = client
        .delete(format!("{}/cities/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}
