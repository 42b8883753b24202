//! Unit tests for the JSON file store.

use crate::comment::{
    adapters::json_file::JsonFileCommentStore,
    domain::{Comment, CommentBody, CommentId, CommenterName, EmailAddress},
    ports::{CommentRepository, CommentRepositoryError},
};
use mockable::DefaultClock;
use std::path::PathBuf;
use tempfile::TempDir;

fn store_path(dir: &TempDir) -> PathBuf {
    dir.path().join("comments.json")
}

fn open_store(dir: &TempDir) -> JsonFileCommentStore {
    JsonFileCommentStore::open(&store_path(dir)).expect("store should open")
}

fn sample_comment(name: &str, email: &str, body: &str) -> Comment {
    Comment::new(
        CommenterName::new(name).expect("name should validate"),
        EmailAddress::new(email).expect("email should validate"),
        CommentBody::new(body).expect("body should validate"),
        &DefaultClock,
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn initialize_creates_empty_document() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);

    store.initialize().await.expect("initialize should succeed");

    let content = std::fs::read_to_string(store_path(&dir)).expect("file should exist");
    assert_eq!(content, "[]");
}

#[tokio::test(flavor = "multi_thread")]
async fn initialize_leaves_existing_content_untouched() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);
    store.initialize().await.expect("initialize should succeed");

    let comment = sample_comment("Ann", "ann@example.com", "Great post!");
    store.insert(&comment).await.expect("insert should succeed");

    store
        .initialize()
        .await
        .expect("re-initialize should succeed");

    let found = store
        .find_by_id(comment.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(found, Some(comment));
}

#[tokio::test(flavor = "multi_thread")]
async fn insert_writes_four_space_indented_document() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);
    store.initialize().await.expect("initialize should succeed");

    let comment = sample_comment("Ann", "ann@example.com", "Great post!");
    store.insert(&comment).await.expect("insert should succeed");

    let content = std::fs::read_to_string(store_path(&dir)).expect("file should exist");
    assert!(content.starts_with("[\n    {"));
    assert!(content.contains("\n        \"email\": \"ann@example.com\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn comments_survive_reopening_the_store() {
    let dir = TempDir::new().expect("tempdir");
    let comment = sample_comment("Ann", "ann@example.com", "Great post!");

    {
        let store = open_store(&dir);
        store.initialize().await.expect("initialize should succeed");
        store.insert(&comment).await.expect("insert should succeed");
    }

    let reopened = open_store(&dir);
    let found = reopened
        .find_by_id(comment.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(found, Some(comment));
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_email_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);
    store.initialize().await.expect("initialize should succeed");

    let first = sample_comment("Ann", "ann@example.com", "Great post!");
    store.insert(&first).await.expect("insert should succeed");

    let second = sample_comment("Somebody Else", "ann@example.com", "Another comment");
    let result = store.insert(&second).await;

    assert!(matches!(
        result,
        Err(CommentRepositoryError::DuplicateEmail(_))
    ));

    let all = store.list_all().await.expect("listing should succeed");
    assert_eq!(all.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_missing_comment_reports_not_found() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);
    store.initialize().await.expect("initialize should succeed");

    let absent = sample_comment("Ann", "ann@example.com", "Great post!");
    let result = store.update(&absent).await;

    assert!(matches!(result, Err(CommentRepositoryError::NotFound(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_comment_reports_not_found() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);
    store.initialize().await.expect("initialize should succeed");

    let result = store.delete(CommentId::new()).await;

    assert!(matches!(result, Err(CommentRepositoryError::NotFound(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn list_preserves_insertion_order() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);
    store.initialize().await.expect("initialize should succeed");

    let first = sample_comment("Ann", "ann@example.com", "Great post!");
    let second = sample_comment("Ben", "ben@example.com", "Nice writeup, thanks!");
    store.insert(&first).await.expect("insert should succeed");
    store.insert(&second).await.expect("insert should succeed");

    let all = store.list_all().await.expect("listing should succeed");
    let ids: Vec<_> = all.iter().map(Comment::id).collect();
    assert_eq!(ids, vec![first.id(), second.id()]);
}

#[tokio::test(flavor = "multi_thread")]
async fn corrupt_document_surfaces_invalid_persisted_data() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);
    std::fs::write(store_path(&dir), "not json at all").expect("write should succeed");

    let result = store.list_all().await;

    assert!(matches!(
        result,
        Err(CommentRepositoryError::InvalidPersistedData(_))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_rewrites_record_in_place() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);
    store.initialize().await.expect("initialize should succeed");

    let mut comment = sample_comment("Ann", "ann@example.com", "Great post!");
    store.insert(&comment).await.expect("insert should succeed");

    comment.replace(
        CommenterName::new("Ann B.").expect("name should validate"),
        EmailAddress::new("ann.b@example.com").expect("email should validate"),
        CommentBody::new("updated text").expect("body should validate"),
        &DefaultClock,
    );
    store.update(&comment).await.expect("update should succeed");

    let found = store
        .find_by_id(comment.id())
        .await
        .expect("lookup should succeed")
        .expect("comment should exist");
    assert_eq!(found.email().as_str(), "ann.b@example.com");
    assert_eq!(found.body().as_str(), "updated text");
}
