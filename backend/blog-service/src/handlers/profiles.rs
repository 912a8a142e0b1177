/// Profile handlers - an author's page
use crate::error::Result;
use crate::handlers::PageQuery;
use crate::middleware::OptionalUser;
use crate::services::PostService;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// An author's profile: their posts, total post count and, for an
/// authenticated viewer, whether they already follow the author.
pub async fn profile(
    pool: web::Data<PgPool>,
    username: web::Path<String>,
    viewer: OptionalUser,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let viewer_id = viewer.0.map(|u| u.id);
    let context = service
        .profile_page(&username, viewer_id, query.number())
        .await?;

    Ok(HttpResponse::Ok().json(context))
}
