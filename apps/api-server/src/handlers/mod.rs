//! HTTP handlers and route configuration.

mod auth;
mod groups;
mod health;
mod posts;
mod profiles;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            // Posts and their comments
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::index))
                    .route("", web::post().to(posts::create))
                    .route("/{post_id}", web::get().to(posts::detail))
                    .route("/{post_id}", web::put().to(posts::edit))
                    .route("/{post_id}", web::delete().to(posts::delete))
                    .route("/{post_id}/comments", web::get().to(posts::list_comments))
                    .route("/{post_id}/comments", web::post().to(posts::add_comment)),
            )
            // Topic groups
            .service(
                web::scope("/groups")
                    .route("", web::get().to(groups::list))
                    .route("", web::post().to(groups::create))
                    .route("/{slug}", web::get().to(groups::detail))
                    .route("/{slug}", web::delete().to(groups::delete)),
            )
            // Author profiles and follows
            .service(
                web::scope("/profiles")
                    .route("/{username}", web::get().to(profiles::profile))
                    .route("/{username}/follow", web::post().to(profiles::follow))
                    .route("/{username}/follow", web::delete().to(profiles::unfollow)),
            )
            // Personalized feed of followed authors
            .route("/feed", web::get().to(profiles::feed)),
    );
}
