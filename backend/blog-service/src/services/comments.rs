/// Comment service - replies attached to posts
use crate::db::{comment_repo, post_repo};
use crate::error::{AppError, Result};
use crate::models::Comment;
use sqlx::PgPool;
use uuid::Uuid;

pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Attach a comment to an existing post. 404s when the post is gone.
    pub async fn add_comment(
        &self,
        post_id: Uuid,
        author_id: Uuid,
        text: &str,
    ) -> Result<Comment> {
        if post_repo::find_post_by_id(&self.pool, post_id).await?.is_none() {
            return Err(AppError::NotFound(format!("post {} not found", post_id)));
        }

        let comment = comment_repo::create_comment(&self.pool, post_id, author_id, text)
            .await
            .map_err(|e| AppError::from_write_error(e, "comments_author_id_fkey"))?;
        Ok(comment)
    }
}
