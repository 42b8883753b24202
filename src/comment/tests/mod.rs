//! Unit tests for the comment domain, service, and file-backed store.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]

mod json_store_tests;
