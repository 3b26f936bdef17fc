//! Contract-test toolkit for a five-resource REST fixture service.
//!
//! # Overview
//! A resilient synchronous HTTP client (connection reuse, fixed-delay retry
//! on transport faults, HTTP error statuses surfaced as data) composed with
//! thin per-resource façades, a relational record store used as a test
//! oracle, JSON Schema validation, and YAML session configuration.
//!
//! # Design
//! - Transport faults are the only client errors; 4xx/5xx come back inside
//!   an ordinary `Envelope` for the caller to assert on.
//! - Façades hold an `HttpClient` handle and do pure path assembly; there is
//!   no inheritance hierarchy.
//! - The record store is append-only with a fixed five-table schema; tests
//!   cross-check API responses against the mirrored rows.
//! - DTOs are defined independently from the fixture-server crate;
//!   integration tests catch schema drift.

pub mod api;
pub mod config;
pub mod email;
pub mod error;
pub mod http;
pub mod retry;
pub mod schema;
pub mod store;
pub mod types;

pub use api::{AlbumsClient, CommentsClient, PostsClient, TodosClient, UsersClient};
pub use config::Config;
pub use email::is_valid_email;
pub use error::ClientError;
pub use http::{Envelope, HttpClient, HttpMethod};
pub use retry::{with_retry, RetryPolicy};
pub use store::{sql_value, RecordStore, SqlValue};
pub use types::{Album, Comment, Post, Todo, User};
