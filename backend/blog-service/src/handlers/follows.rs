/// Follow handlers - the follow feed and subscription actions
use crate::error::Result;
use crate::handlers::PageQuery;
use crate::middleware::CurrentUser;
use crate::services::{FollowService, PostService};
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// Posts by every author the requesting user follows, newest first
pub async fn follow_index(
    pool: web::Data<PgPool>,
    user: CurrentUser,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let page = service.follow_page(user.id, query.number()).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// Follow an author, then return to their profile. Re-following and
/// self-following are quietly ignored.
pub async fn profile_follow(
    pool: web::Data<PgPool>,
    user: CurrentUser,
    username: web::Path<String>,
) -> Result<HttpResponse> {
    let service = FollowService::new((**pool).clone());
    let created = service.follow_by_username(user.id, &username).await?;

    if created {
        tracing::info!(follower = %user.username, author = username.as_str(), "follow created");
    }

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, format!("/profile/{}/", username)))
        .finish())
}

/// Unfollow an author, then return to their profile. Idempotent.
pub async fn profile_unfollow(
    pool: web::Data<PgPool>,
    user: CurrentUser,
    username: web::Path<String>,
) -> Result<HttpResponse> {
    let service = FollowService::new((**pool).clone());
    service.unfollow_by_username(user.id, &username).await?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, format!("/profile/{}/", username)))
        .finish())
}
