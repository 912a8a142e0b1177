/// Post handlers - feeds, detail, create and edit
use crate::cache::PageCache;
use crate::error::Result;
use crate::handlers::PageQuery;
use crate::middleware::CurrentUser;
use crate::services::posts::EditOutcome;
use crate::services::PostService;
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// Payload for creating or editing a post. The same form drives both, as in
/// the rendered-form original.
#[derive(Debug, Deserialize, Validate)]
pub struct PostForm {
    #[validate(length(min = 3, message = "post text must be at least 3 characters long"))]
    pub text: String,
    pub group_id: Option<Uuid>,
    pub image_key: Option<String>,
}

fn post_service(pool: &web::Data<PgPool>, cache: &web::Data<Option<Arc<PageCache>>>) -> PostService {
    match cache.get_ref() {
        Some(cache) => PostService::with_cache(pool.get_ref().clone(), cache.clone()),
        None => PostService::new(pool.get_ref().clone()),
    }
}

/// The index feed: every post, newest first
pub async fn index(
    pool: web::Data<PgPool>,
    cache: web::Data<Option<Arc<PageCache>>>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse> {
    let service = post_service(&pool, &cache);
    let page = service.index_page(query.number()).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// A single post with its comments
pub async fn post_detail(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let context = service.post_detail(*post_id).await?;

    Ok(HttpResponse::Ok().json(context))
}

/// Create a post and send the author to their profile
pub async fn create_post(
    pool: web::Data<PgPool>,
    user: CurrentUser,
    form: web::Json<PostForm>,
) -> Result<HttpResponse> {
    form.validate()?;

    let service = PostService::new((**pool).clone());
    let post = service
        .create_post(user.id, &form.text, form.group_id, form.image_key.as_deref())
        .await?;

    tracing::info!(post_id = %post.id, author = %user.username, "post created");

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, format!("/profile/{}/", user.username)))
        .json(post))
}

/// Edit a post. Only the author may change it; anyone else is sent back to
/// the read-only detail view with nothing applied. The service checks
/// ownership before running validation, so non-authors never see field
/// errors.
pub async fn edit_post(
    pool: web::Data<PgPool>,
    user: CurrentUser,
    post_id: web::Path<Uuid>,
    form: web::Json<PostForm>,
) -> Result<HttpResponse> {
    let detail_url = format!("/posts/{}/", *post_id);
    let service = PostService::new((**pool).clone());

    let outcome = service
        .edit_post(
            *post_id,
            user.id,
            &form.text,
            form.group_id,
            form.image_key.as_deref(),
            || {
                form.validate()?;
                Ok(())
            },
        )
        .await?;

    match outcome {
        EditOutcome::Updated(post) => {
            tracing::info!(post_id = %post.id, author = %user.username, "post updated")
        }
        EditOutcome::NotAuthor => {
            tracing::debug!(editor = %user.username, "edit refused, not the author")
        }
    }

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, detail_url))
        .finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_form_rejects_two_characters() {
        let form = PostForm {
            text: "ab".to_string(),
            group_id: None,
            image_key: None,
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("text"));
    }

    #[test]
    fn post_form_accepts_three_characters() {
        let form = PostForm {
            text: "abc".to_string(),
            group_id: None,
            image_key: None,
        };
        assert!(form.validate().is_ok());
    }
}
