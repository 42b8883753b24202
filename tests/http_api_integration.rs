//! End-to-end wire-contract tests for the comment API.
//!
//! Each test serves the real router on an ephemeral port and drives it
//! over HTTP, asserting the response envelope exactly as a client sees it.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]

use commentbox::comment::adapters::json_file::JsonFileCommentStore;
use commentbox::comment::adapters::memory::InMemoryCommentStore;
use commentbox::comment::ports::CommentRepository;
use commentbox::comment::services::CommentService;
use commentbox::http;
use mockable::DefaultClock;
use serde_json::{Value, json};
use std::sync::Arc;

/// Serves the API over the given repository and returns its base URL.
async fn spawn_server(repository: Arc<dyn CommentRepository>) -> String {
    repository
        .initialize()
        .await
        .expect("storage initialization should succeed");
    let service = CommentService::new(repository, Arc::new(DefaultClock));
    let app = http::router(service);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let addr = listener.local_addr().expect("listener should have an address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server should run");
    });
    format!("http://{addr}")
}

async fn spawn_memory_server() -> String {
    spawn_server(Arc::new(InMemoryCommentStore::new())).await
}

fn ann_payload() -> Value {
    json!({"name": "Ann", "email": "ann@example.com", "comment": "Great post!"})
}

async fn post_comment(client: &reqwest::Client, base: &str, payload: &Value) -> reqwest::Response {
    client
        .post(format!("{base}/comments/add"))
        .json(payload)
        .send()
        .await
        .expect("request should complete")
}

async fn body_json(response: reqwest::Response) -> Value {
    response.json().await.expect("body should be JSON")
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_list_returns_404_with_empty_message() {
    let base = spawn_memory_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base}/comments"))
        .send()
        .await
        .expect("request should complete");

    assert_eq!(response.status(), 404);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["statusCode"], json!(404));
    let message = body["error"]["message"]
        .as_str()
        .expect("error message should be present");
    assert!(message.contains("empty"));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_returns_201_with_created_record() {
    let base = spawn_memory_server().await;
    let client = reqwest::Client::new();

    let response = post_comment(&client, &base, &ann_payload()).await;

    assert_eq!(response.status(), 201);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["statusCode"], json!(201));
    assert_eq!(body["message"], json!("Comment added successfully."));
    assert_eq!(body["data"]["email"], json!("ann@example.com"));
    assert_eq!(body["data"]["comment"], json!("Great post!"));
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["createdAt"].is_string());
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_email_returns_400_and_store_is_unchanged() {
    let base = spawn_memory_server().await;
    let client = reqwest::Client::new();

    post_comment(&client, &base, &ann_payload()).await;
    let duplicate = json!({
        "name": "Somebody Else",
        "email": "ann@example.com",
        "comment": "Another comment entirely",
    });
    let response = post_comment(&client, &base, &duplicate).await;

    assert_eq!(response.status(), 400);
    let body = body_json(response).await;
    let message = body["error"]["message"]
        .as_str()
        .expect("error message should be present");
    assert!(message.contains("already in use"));

    let list = client
        .get(format!("{base}/comments"))
        .send()
        .await
        .expect("request should complete");
    let list_body = body_json(list).await;
    let data = list_body["data"].as_array().expect("data should be an array");
    assert_eq!(data.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn created_comment_is_fetchable_by_id() {
    let base = spawn_memory_server().await;
    let client = reqwest::Client::new();

    let created = body_json(post_comment(&client, &base, &ann_payload()).await).await;
    let id = created["data"]["id"].as_str().expect("id should be a string");

    let response = client
        .get(format!("{base}/comments/{id}"))
        .send()
        .await
        .expect("request should complete");

    assert_eq!(response.status(), 200);
    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Comment fetched successfully."));
    assert_eq!(body["data"]["name"], json!("Ann"));
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_and_malformed_ids_return_404() {
    let base = spawn_memory_server().await;
    let client = reqwest::Client::new();

    let unknown = client
        .get(format!(
            "{base}/comments/00000000-0000-4000-8000-000000000000"
        ))
        .send()
        .await
        .expect("request should complete");
    assert_eq!(unknown.status(), 404);

    let malformed = client
        .get(format!("{base}/comments/not-a-uuid"))
        .send()
        .await
        .expect("request should complete");
    assert_eq!(malformed.status(), 404);
}

#[tokio::test(flavor = "multi_thread")]
async fn extra_fields_are_rejected_with_400() {
    let base = spawn_memory_server().await;
    let client = reqwest::Client::new();

    let payload = json!({
        "name": "Ann",
        "email": "ann@example.com",
        "comment": "Great post!",
        "rating": 5,
    });
    let response = post_comment(&client, &base, &payload).await;

    assert_eq!(response.status(), 400);
    let body = body_json(response).await;
    assert_eq!(
        body["error"]["message"],
        json!("Please remove the extra fields")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_fields_are_rejected_with_400() {
    let base = spawn_memory_server().await;
    let client = reqwest::Client::new();

    let payload = json!({"name": "Ann", "comment": "Great post!"});
    let response = post_comment(&client, &base, &payload).await;

    assert_eq!(response.status(), 400);
    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], json!("Missing required fields."));
    assert_eq!(
        body["error"]["details"],
        json!("Name, email, and comment are required.")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn digit_leading_email_is_rejected_with_400() {
    let base = spawn_memory_server().await;
    let client = reqwest::Client::new();

    let payload = json!({
        "name": "Ann",
        "email": "1ann@example.com",
        "comment": "Great post!",
    });
    let response = post_comment(&client, &base, &payload).await;

    assert_eq!(response.status(), 400);
    let body = body_json(response).await;
    let message = body["error"]["message"]
        .as_str()
        .expect("error message should be present");
    assert!(message.contains("must start with a letter"));
}

#[tokio::test(flavor = "multi_thread")]
async fn too_short_comment_is_rejected_with_400() {
    let base = spawn_memory_server().await;
    let client = reqwest::Client::new();

    let payload = json!({"name": "Ann", "email": "ann@example.com", "comment": "hi"});
    let response = post_comment(&client, &base, &payload).await;

    assert_eq!(response.status(), 400);
    let body = body_json(response).await;
    let message = body["error"]["message"]
        .as_str()
        .expect("error message should be present");
    assert!(message.contains("between 5 and 255"));
}

#[tokio::test(flavor = "multi_thread")]
async fn edit_replaces_content_and_trims_comment() {
    let base = spawn_memory_server().await;
    let client = reqwest::Client::new();

    let created = body_json(post_comment(&client, &base, &ann_payload()).await).await;
    let id = created["data"]["id"].as_str().expect("id should be a string");

    let replacement = json!({
        "name": "Ann",
        "email": "ann@example.com",
        "comment": "  updated text  ",
    });
    let response = client
        .put(format!("{base}/comments/edit/{id}"))
        .json(&replacement)
        .send()
        .await
        .expect("request should complete");

    assert_eq!(response.status(), 200);
    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Comment updated successfully."));
    assert_eq!(body["data"]["comment"], json!("updated text"));

    let fetched = client
        .get(format!("{base}/comments/{id}"))
        .send()
        .await
        .expect("request should complete");
    let fetched_body = body_json(fetched).await;
    assert_eq!(fetched_body["data"]["comment"], json!("updated text"));
}

#[tokio::test(flavor = "multi_thread")]
async fn edit_unknown_id_returns_404() {
    let base = spawn_memory_server().await;
    let client = reqwest::Client::new();

    let response = client
        .put(format!(
            "{base}/comments/edit/00000000-0000-4000-8000-000000000000"
        ))
        .json(&ann_payload())
        .send()
        .await
        .expect("request should complete");

    assert_eq!(response.status(), 404);
    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], json!("Comment not found."));
}

#[tokio::test(flavor = "multi_thread")]
async fn edit_to_taken_email_returns_400() {
    let base = spawn_memory_server().await;
    let client = reqwest::Client::new();

    post_comment(&client, &base, &ann_payload()).await;
    let ben = json!({
        "name": "Ben",
        "email": "ben@example.com",
        "comment": "Nice writeup, thanks!",
    });
    let created = body_json(post_comment(&client, &base, &ben).await).await;
    let id = created["data"]["id"].as_str().expect("id should be a string");

    let replacement = json!({
        "name": "Ben",
        "email": "ann@example.com",
        "comment": "Nice writeup, thanks!",
    });
    let response = client
        .put(format!("{base}/comments/edit/{id}"))
        .json(&replacement)
        .send()
        .await
        .expect("request should complete");

    assert_eq!(response.status(), 400);
    let body = body_json(response).await;
    assert_eq!(
        body["error"]["message"],
        json!("Email already in use or not a valid email.")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_succeeds_once_then_reports_404() {
    let base = spawn_memory_server().await;
    let client = reqwest::Client::new();

    let created = body_json(post_comment(&client, &base, &ann_payload()).await).await;
    let id = created["data"]["id"].as_str().expect("id should be a string");

    let first = client
        .delete(format!("{base}/comments/delete/{id}"))
        .send()
        .await
        .expect("request should complete");
    assert_eq!(first.status(), 200);
    let first_body = body_json(first).await;
    assert_eq!(first_body["message"], json!("Comment deleted successfully."));

    let second = client
        .delete(format!("{base}/comments/delete/{id}"))
        .send()
        .await
        .expect("request should complete");
    assert_eq!(second.status(), 404);

    let fetched = client
        .get(format!("{base}/comments/{id}"))
        .send()
        .await
        .expect("request should complete");
    assert_eq!(fetched.status(), 404);
}

#[tokio::test(flavor = "multi_thread")]
async fn file_backend_serves_and_persists_the_document() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let path = dir.path().join("comments.json");
    let store = JsonFileCommentStore::open(&path).expect("store should open");
    let base = spawn_server(Arc::new(store)).await;
    let client = reqwest::Client::new();

    let response = post_comment(&client, &base, &ann_payload()).await;
    assert_eq!(response.status(), 201);

    let content = std::fs::read_to_string(&path).expect("document should exist");
    assert!(content.contains("\"email\": \"ann@example.com\""));
    assert!(content.starts_with("[\n    {"));
}
