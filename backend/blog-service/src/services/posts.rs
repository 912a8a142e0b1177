/// Post service - feeds, detail views and post authoring
use crate::cache::PageCache;
use crate::db::{comment_repo, group_repo, post_repo, user_repo};
use crate::error::{AppError, Result};
use crate::models::{CommentWithAuthor, Group, Post, PostWithAuthor, User};
use crate::services::pagination::{Page, Paginator, POSTS_PER_PAGE};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// Context for the profile view: the paginated posts plus the totals and
/// relationship flags the page renders.
#[derive(Debug, Serialize)]
pub struct ProfileContext {
    pub author: User,
    pub posts_count: i64,
    pub following: bool,
    pub user_is_author: bool,
    pub page: Page<PostWithAuthor>,
}

/// Context for the post detail view.
#[derive(Debug, Serialize)]
pub struct PostDetailContext {
    pub post: PostWithAuthor,
    pub author_posts_count: i64,
    pub comments: Vec<CommentWithAuthor>,
}

/// Outcome of an edit attempt by an authenticated user.
#[derive(Debug)]
pub enum EditOutcome {
    /// The editor is the author and the changes were applied.
    Updated(Post),
    /// The editor is not the author; nothing was changed.
    NotAuthor,
}

pub struct PostService {
    pool: PgPool,
    cache: Option<Arc<PageCache>>,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool, cache: None }
    }

    pub fn with_cache(pool: PgPool, cache: Arc<PageCache>) -> Self {
        Self {
            pool,
            cache: Some(cache),
        }
    }

    fn cache(&self) -> Option<&Arc<PageCache>> {
        self.cache.as_ref()
    }

    /// The index feed: all posts, newest first. Served from the page cache
    /// when possible; cache failures fall back to the database.
    pub async fn index_page(&self, requested_page: i64) -> Result<Page<PostWithAuthor>> {
        if let Some(cache) = self.cache() {
            match cache.read_index_page(requested_page.max(1)).await {
                Ok(Some(page)) => return Ok(page),
                Ok(None) => {}
                Err(err) => tracing::debug!("index cache read failed: {}", err),
            }
        }

        let total = post_repo::count_posts(&self.pool).await?;
        let spec = Paginator::new(total, POSTS_PER_PAGE).page(requested_page);
        let posts = post_repo::list_posts(&self.pool, spec.limit, spec.offset).await?;
        let page = Page::new(posts, spec, total);

        if let Some(cache) = self.cache() {
            if let Err(err) = cache.write_index_page(&page).await {
                tracing::debug!("index cache write failed: {}", err);
            }
        }

        Ok(page)
    }

    /// Posts in a group, newest first. 404s on an unknown slug.
    pub async fn group_page(
        &self,
        slug: &str,
        requested_page: i64,
    ) -> Result<(Group, Page<PostWithAuthor>)> {
        let group = group_repo::find_group_by_slug(&self.pool, slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("group '{}' not found", slug)))?;

        let total = post_repo::count_posts_by_group(&self.pool, group.id).await?;
        let spec = Paginator::new(total, POSTS_PER_PAGE).page(requested_page);
        let posts =
            post_repo::list_posts_by_group(&self.pool, group.id, spec.limit, spec.offset).await?;

        Ok((group, Page::new(posts, spec, total)))
    }

    /// An author's profile: their posts plus the totals and, when the viewer
    /// is authenticated, whether the viewer already follows them.
    pub async fn profile_page(
        &self,
        username: &str,
        viewer: Option<Uuid>,
        requested_page: i64,
    ) -> Result<ProfileContext> {
        let author = user_repo::find_user_by_username(&self.pool, username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user '{}' not found", username)))?;

        let posts_count = post_repo::count_posts_by_author(&self.pool, author.id).await?;
        let spec = Paginator::new(posts_count, POSTS_PER_PAGE).page(requested_page);
        let posts =
            post_repo::list_posts_by_author(&self.pool, author.id, spec.limit, spec.offset).await?;

        let following = match viewer {
            Some(viewer_id) if viewer_id != author.id => {
                crate::db::follow_repo::follow_exists(&self.pool, viewer_id, author.id).await?
            }
            _ => false,
        };
        let user_is_author = viewer == Some(author.id);

        Ok(ProfileContext {
            author,
            posts_count,
            following,
            user_is_author,
            page: Page::new(posts, spec, posts_count),
        })
    }

    /// A single post with its comments and the author's total post count.
    pub async fn post_detail(&self, post_id: Uuid) -> Result<PostDetailContext> {
        let post = post_repo::find_post_with_author(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {} not found", post_id)))?;

        let author_posts_count =
            post_repo::count_posts_by_author(&self.pool, post.author_id).await?;
        let comments = comment_repo::list_comments_for_post(&self.pool, post_id).await?;

        Ok(PostDetailContext {
            post,
            author_posts_count,
            comments,
        })
    }

    /// The follow feed: the union of posts by every author the user follows.
    pub async fn follow_page(
        &self,
        user_id: Uuid,
        requested_page: i64,
    ) -> Result<Page<PostWithAuthor>> {
        let total = post_repo::count_followed_posts(&self.pool, user_id).await?;
        let spec = Paginator::new(total, POSTS_PER_PAGE).page(requested_page);
        let posts =
            post_repo::list_followed_posts(&self.pool, user_id, spec.limit, spec.offset).await?;

        Ok(Page::new(posts, spec, total))
    }

    /// Create a post owned by `author_id`. The group, when given, must exist.
    pub async fn create_post(
        &self,
        author_id: Uuid,
        text: &str,
        group_id: Option<Uuid>,
        image_key: Option<&str>,
    ) -> Result<Post> {
        if let Some(gid) = group_id {
            if group_repo::find_group_by_id(&self.pool, gid).await?.is_none() {
                return Err(AppError::BadRequest(format!("group {} does not exist", gid)));
            }
        }

        let post = post_repo::create_post(&self.pool, author_id, text, group_id, image_key)
            .await
            .map_err(|e| AppError::from_write_error(e, "posts_author_id_fkey"))?;
        Ok(post)
    }

    /// Apply an edit if and only if `editor_id` authored the post. The row
    /// is read once: ownership is checked first, then `validate` runs, then
    /// the update is applied. A non-author attempt is reported, not erred,
    /// so the handler can redirect to the read-only view without ever
    /// exposing field errors to a non-author.
    pub async fn edit_post(
        &self,
        post_id: Uuid,
        editor_id: Uuid,
        text: &str,
        group_id: Option<Uuid>,
        image_key: Option<&str>,
        validate: impl FnOnce() -> Result<()>,
    ) -> Result<EditOutcome> {
        let post = post_repo::find_post_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {} not found", post_id)))?;

        if post.author_id != editor_id {
            return Ok(EditOutcome::NotAuthor);
        }

        validate()?;

        if let Some(gid) = group_id {
            if group_repo::find_group_by_id(&self.pool, gid).await?.is_none() {
                return Err(AppError::BadRequest(format!("group {} does not exist", gid)));
            }
        }

        let updated = post_repo::update_post(&self.pool, post_id, text, group_id, image_key).await?;
        Ok(EditOutcome::Updated(updated))
    }
}
