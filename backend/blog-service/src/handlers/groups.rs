/// Group handlers - community feed
use crate::error::Result;
use crate::handlers::PageQuery;
use crate::services::PostService;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// Posts in a group, newest first
pub async fn group_list(
    pool: web::Data<PgPool>,
    slug: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let (group, page) = service.group_page(&slug, query.number()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "group": group,
        "page": page,
    })))
}
