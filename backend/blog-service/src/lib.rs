/// Blog Service Library
///
/// A community blogging service: users publish text posts (optionally tagged
/// with a group and an image), comment on each other's posts and follow
/// authors to build an aggregated feed.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Data structures for users, groups, posts, comments, follows
/// - `services`: Business logic layer (feeds, follows, pagination)
/// - `db`: Database access layer and repositories
/// - `cache`: Redis-backed page cache for the index feed
/// - `auth`: JWT issuing/validation and password hashing
/// - `middleware`: Login gate and identity extractors
/// - `routes`: Route table shared by the binary and the tests
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod auth;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
