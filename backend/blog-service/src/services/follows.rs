/// Follow service - subscription edges between users
use crate::db::{follow_repo, user_repo};
use crate::error::{AppError, Result};
use sqlx::PgPool;
use uuid::Uuid;

pub struct FollowService {
    pool: PgPool,
}

impl FollowService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Follow an author. Self-follows are refused before touching the
    /// database, duplicates are absorbed by the unique pair constraint.
    /// Returns true when a new edge was created.
    pub async fn follow(&self, user_id: Uuid, author_id: Uuid) -> Result<bool> {
        if user_id == author_id {
            return Ok(false);
        }

        let created = follow_repo::create_follow(&self.pool, user_id, author_id)
            .await
            .map_err(|e| AppError::from_write_error(e, "follows_user_id_fkey"))?;
        Ok(created)
    }

    /// Unfollow an author. Idempotent: unfollowing someone you don't follow
    /// is a no-op. Returns the number of edges removed (0 or 1).
    pub async fn unfollow(&self, user_id: Uuid, author_id: Uuid) -> Result<u64> {
        let removed = follow_repo::delete_follow(&self.pool, user_id, author_id).await?;
        Ok(removed)
    }

    /// Follow an author by username. 404s on an unknown author.
    pub async fn follow_by_username(&self, user_id: Uuid, username: &str) -> Result<bool> {
        let author = self.resolve_author(username).await?;
        self.follow(user_id, author).await
    }

    /// Unfollow an author by username. 404s on an unknown author.
    pub async fn unfollow_by_username(&self, user_id: Uuid, username: &str) -> Result<u64> {
        let author = self.resolve_author(username).await?;
        self.unfollow(user_id, author).await
    }

    async fn resolve_author(&self, username: &str) -> Result<Uuid> {
        let author = user_repo::find_user_by_username(&self.pool, username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user '{}' not found", username)))?;
        Ok(author.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    // A lazy pool never connects unless a query actually runs, so the
    // self-follow guard can be exercised without a database.
    fn lazy_pool() -> PgPool {
        PgPoolOptions::new()
            .connect_lazy("postgres://localhost/blog_test")
            .unwrap()
    }

    #[tokio::test]
    async fn self_follow_is_refused_without_touching_the_database() {
        let service = FollowService::new(lazy_pool());
        let user = Uuid::new_v4();

        let created = service.follow(user, user).await.unwrap();
        assert!(!created);
    }
}
