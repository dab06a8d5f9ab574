//! HTTP transport tests.
//!
//! Starts an axum server on an ephemeral port and exercises it with reqwest.

use std::sync::Arc;

use library_api::{handlers, microsvc, JsonFileStore};
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::support::book_json;

/// Bind to port 0 and return the base URL.
async fn start_server() -> (String, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("data.json"));
    let app = microsvc::router(Arc::new(handlers::service(store)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), dir)
}

#[tokio::test]
async fn scenario_create_list_update_delete() {
    let (base, _dir) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/books"))
        .json(&book_json("b1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "message": "Book added successfully", "book": book_json("b1") })
    );

    let resp = client.get(format!("{base}/books")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "books": [book_json("b1")] }));

    let resp = client
        .put(format!("{base}/books/b1"))
        .json(&json!({ "copies": 5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Book updated successfully");
    assert_eq!(body["book"]["copies"], 5);
    assert_eq!(body["book"]["year"], 2020);

    let resp = client.delete(format!("{base}/books/b1")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Book deleted successfully" }));

    let resp = client.get(format!("{base}/books/b1")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Book not found" }));
}

#[tokio::test]
async fn get_by_id_returns_book_envelope() {
    let (base, _dir) = start_server().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{base}/books"))
        .json(&book_json("b1"))
        .send()
        .await
        .unwrap();

    let resp = client.get(format!("{base}/books/b1")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "book": book_json("b1") }));
}

#[tokio::test]
async fn create_with_zero_copies_is_400() {
    let (base, _dir) = start_server().await;
    let client = reqwest::Client::new();

    let mut book = book_json("b1");
    book["copies"] = json!(0);
    let resp = client
        .post(format!("{base}/books"))
        .json(&book)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "All book fields are required." }));

    let body: Value = client
        .get(format!("{base}/books"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({ "books": [] }));
}

#[tokio::test]
async fn empty_post_body_is_a_validation_error() {
    let (base, _dir) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client.post(format!("{base}/books")).send().await.unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "All book fields are required.");
}

#[tokio::test]
async fn malformed_json_is_400_with_message() {
    let (base, _dir) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/books"))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn update_and_delete_unknown_id_are_404() {
    let (base, _dir) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/books/ghost"))
        .json(&json!({ "title": "X" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client
        .delete(format!("{base}/books/ghost"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn put_with_empty_body_changes_nothing() {
    let (base, _dir) = start_server().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{base}/books"))
        .json(&book_json("b1"))
        .send()
        .await
        .unwrap();

    let resp = client.put(format!("{base}/books/b1")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["book"], book_json("b1"));
}

#[tokio::test]
async fn unrouted_path_is_404() {
    let (base, _dir) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/authors")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_creates_all_land() {
    let (base, _dir) = start_server().await;
    let client = reqwest::Client::new();

    let tasks: Vec<_> = (0..20)
        .map(|i| {
            let client = client.clone();
            let url = format!("{base}/books");
            tokio::spawn(async move {
                client
                    .post(url)
                    .json(&book_json(&format!("c{i}")))
                    .send()
                    .await
                    .unwrap()
                    .status()
            })
        })
        .collect();
    for task in tasks {
        assert_eq!(task.await.unwrap(), 201);
    }

    let body: Value = client
        .get(format!("{base}/books"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["books"].as_array().unwrap().len(), 20);
}
