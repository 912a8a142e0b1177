/// Comment handlers
use crate::error::Result;
use crate::middleware::CurrentUser;
use crate::services::CommentService;
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CommentForm {
    #[validate(length(min = 3, message = "comment text must be at least 3 characters long"))]
    pub text: String,
}

/// Add a comment to a post and return to the detail view
pub async fn add_comment(
    pool: web::Data<PgPool>,
    user: CurrentUser,
    post_id: web::Path<Uuid>,
    form: web::Json<CommentForm>,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());

    form.validate()?;
    let comment = service.add_comment(*post_id, user.id, &form.text).await?;

    tracing::info!(comment_id = %comment.id, post_id = %comment.post_id, "comment added");

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, format!("/posts/{}/", *post_id)))
        .json(comment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_form_rejects_short_text() {
        let form = CommentForm {
            text: "ok".to_string(),
        };
        assert!(form.validate().is_err());

        let form = CommentForm {
            text: "ok!".to_string(),
        };
        assert!(form.validate().is_ok());
    }
}
