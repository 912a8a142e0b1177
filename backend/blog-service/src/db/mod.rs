/// Database access layer
///
/// Repository functions are thin sqlx wrappers over the tables; all ordering
/// and pagination happens in SQL so feeds never materialize more than one
/// page in memory.
pub mod comment_repo;
pub mod follow_repo;
pub mod group_repo;
pub mod post_repo;
pub mod user_repo;
