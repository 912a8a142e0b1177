/// Auth handlers - account creation and token issuing
///
/// Login failures never say whether the username or the password was wrong.
use crate::auth::{jwt, password};
use crate::db::user_repo;
use crate::error::{AppError, Result};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 3, max = 150))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginPageQuery {
    pub next: Option<String>,
}

/// Create an account
pub async fn signup(
    pool: web::Data<PgPool>,
    req: web::Json<SignupRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    if user_repo::find_user_by_username(&pool, &req.username)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(format!(
            "username '{}' is already taken",
            req.username
        )));
    }

    let password_hash = password::hash_password(&req.password)?;
    let user = user_repo::create_user(&pool, &req.username, &req.email, &password_hash).await?;

    tracing::info!(user_id = %user.id, username = %user.username, "account created");

    Ok(HttpResponse::Created().json(serde_json::json!({
        "id": user.id,
        "username": user.username,
    })))
}

/// Exchange credentials for a bearer token
pub async fn login(pool: web::Data<PgPool>, req: web::Json<LoginRequest>) -> Result<HttpResponse> {
    let user = user_repo::find_user_by_username(&pool, &req.username)
        .await?
        .ok_or_else(|| AppError::Unauthorized("invalid credentials".to_string()))?;

    if !password::verify_password(&req.password, &user.password_hash)? {
        return Err(AppError::Unauthorized("invalid credentials".to_string()));
    }

    let token = jwt::generate_access_token(user.id, &user.username)?;
    Ok(HttpResponse::Ok().json(token))
}

/// The page unauthenticated requests are redirected to. Echoes the `next`
/// target so clients can resume after obtaining a token.
pub async fn login_page(query: web::Query<LoginPageQuery>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "detail": "POST a username and password here to obtain a bearer token",
        "next": query.next,
    }))
}
