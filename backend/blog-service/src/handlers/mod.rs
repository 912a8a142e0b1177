/// HTTP request handlers
pub mod auth;
pub mod comments;
pub mod follows;
pub mod groups;
pub mod posts;
pub mod profiles;

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

/// Page-number query parameter shared by every feed view. Absent pages
/// default to 1; out-of-range values are clamped by the paginator.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

impl PageQuery {
    pub fn number(&self) -> i64 {
        self.page.unwrap_or(1)
    }
}

/// Health check: liveness plus a database round trip
pub async fn health(pool: web::Data<PgPool>) -> HttpResponse {
    match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "blog-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("PostgreSQL connection failed: {}", e),
            "service": "blog-service"
        })),
    }
}

/// JSON 404 for unknown routes
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "Not found",
        "status": 404,
    }))
}
