/// Route table
///
/// Shared between the binary and the integration tests so both exercise the
/// exact same routing and gating. URL shapes keep their trailing slashes;
/// anything unmatched falls through to a JSON 404.
use actix_web::web;

use crate::handlers;
use crate::middleware::LoginRequired;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health))
        // Public feeds
        .route("/", web::get().to(handlers::posts::index))
        .route("/group/{slug}/", web::get().to(handlers::groups::group_list))
        .route(
            "/profile/{username}/",
            web::get().to(handlers::profiles::profile),
        )
        .route(
            "/posts/{post_id}/",
            web::get().to(handlers::posts::post_detail),
        )
        // Gated routes: redirect to login with ?next= when unauthenticated
        .service(
            web::resource("/create/")
                .wrap(LoginRequired)
                .route(web::post().to(handlers::posts::create_post)),
        )
        .service(
            web::resource("/posts/{post_id}/edit/")
                .wrap(LoginRequired)
                .route(web::post().to(handlers::posts::edit_post)),
        )
        .service(
            web::resource("/posts/{post_id}/comment/")
                .wrap(LoginRequired)
                .route(web::post().to(handlers::comments::add_comment)),
        )
        .service(
            web::resource("/follow/")
                .wrap(LoginRequired)
                .route(web::get().to(handlers::follows::follow_index)),
        )
        .service(
            web::resource("/profile/{username}/follow/")
                .wrap(LoginRequired)
                .route(web::post().to(handlers::follows::profile_follow)),
        )
        .service(
            web::resource("/profile/{username}/unfollow/")
                .wrap(LoginRequired)
                .route(web::post().to(handlers::follows::profile_unfollow)),
        )
        // Auth
        .route("/auth/signup/", web::post().to(handlers::auth::signup))
        .service(
            web::resource("/auth/login/")
                .route(web::get().to(handlers::auth::login_page))
                .route(web::post().to(handlers::auth::login)),
        )
        .default_service(web::route().to(handlers::not_found));
}
