//! Commentbox: a comment CRUD API with pluggable storage backends.
//!
//! This crate provides the comment lifecycle — create, list, fetch, edit,
//! delete — behind a single repository port with two interchangeable
//! storage backends (flat JSON file and `PostgreSQL`), selected by
//! configuration.
//!
//! # Architecture
//!
//! Commentbox follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (file, database)
//!
//! # Modules
//!
//! - [`comment`]: Comment domain, persistence port and adapters, service
//! - [`http`]: Request validation, response envelope, routes
//! - [`config`]: Environment-driven server configuration

pub mod comment;
pub mod config;
pub mod http;
