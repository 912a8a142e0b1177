/// HTTP middleware for blog-service
///
/// `LoginRequired` gates mutating and follow-feed routes: a request without
/// a valid bearer token is redirected to the login page with a `next`
/// parameter pointing back at the original URL, mirroring classic
/// login-required semantics. Public feed routes use `OptionalUser` instead,
/// so anonymous readers still get a page while authenticated viewers get
/// their relationship flags.
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, HeaderMap};
use actix_web::{error::ErrorUnauthorized, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use uuid::Uuid;

use crate::auth::jwt;

/// Path of the login endpoint unauthenticated requests are sent to.
pub const LOGIN_URL: &str = "/auth/login/";

/// The authenticated identity stored in request extensions.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
}

/// Identity of the viewer on public routes, when present.
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<CurrentUser>);

/// Build the login redirect for a gated URL.
pub fn login_redirect_target(next: &str) -> String {
    format!("{}?next={}", LOGIN_URL, urlencoding::encode(next))
}

fn user_from_headers(headers: &HeaderMap) -> Option<CurrentUser> {
    let auth_header = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = auth_header.strip_prefix("Bearer ")?;
    let claims = jwt::validate_token(token).ok()?.claims;
    let id = Uuid::parse_str(&claims.sub).ok()?;

    Some(CurrentUser {
        id,
        username: claims.username,
    })
}

/// Actix middleware gating a route behind authentication.
pub struct LoginRequired;

impl<S, B> Transform<S, ServiceRequest> for LoginRequired
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = LoginRequiredService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LoginRequiredService {
            service: Rc::new(service),
        }))
    }
}

pub struct LoginRequiredService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for LoginRequiredService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match user_from_headers(req.headers()) {
            Some(user) => {
                req.extensions_mut().insert(user);
                let service = self.service.clone();
                Box::pin(async move {
                    service.call(req).await.map(|res| res.map_into_left_body())
                })
            }
            None => {
                let next = req
                    .uri()
                    .path_and_query()
                    .map(|pq| pq.as_str().to_owned())
                    .unwrap_or_else(|| req.uri().path().to_owned());
                let target = login_redirect_target(&next);

                let (req, _payload) = req.into_parts();
                let response = HttpResponse::Found()
                    .insert_header((header::LOCATION, target))
                    .finish()
                    .map_into_right_body();

                Box::pin(ready(Ok(ServiceResponse::new(req, response))))
            }
        }
    }
}

impl FromRequest for CurrentUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<CurrentUser>()
                .cloned()
                .ok_or_else(|| ErrorUnauthorized("authentication required")),
        )
    }
}

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Ok(OptionalUser(user_from_headers(req.headers()))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_target_percent_encodes_next() {
        assert_eq!(
            login_redirect_target("/create/"),
            "/auth/login/?next=%2Fcreate%2F"
        );
        assert_eq!(
            login_redirect_target("/follow/?page=2"),
            "/auth/login/?next=%2Ffollow%2F%3Fpage%3D2"
        );
    }
}
