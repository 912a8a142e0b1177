/// Business logic layer
///
/// Services compose repositories, pagination and the optional page cache
/// into the page contexts the handlers render.
pub mod comments;
pub mod follows;
pub mod pagination;
pub mod posts;

pub use comments::CommentService;
pub use follows::FollowService;
pub use pagination::{Page, Paginator, POSTS_PER_PAGE};
pub use posts::PostService;
