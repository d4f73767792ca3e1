//! Profile, follow and feed handlers.

use actix_web::{HttpResponse, web};
use serde_json::json;

use yatube_core::domain::{Follow, User};
use yatube_shared::dto::{PageQuery, ProfileResponse};

use crate::handlers::posts::render_page;
use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

async fn find_author(state: &AppState, username: &str) -> AppResult<User> {
    state
        .users
        .find_by_username(username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile '{}' not found", username)))
}

/// GET /api/profiles/{username} - the author and a page of their posts.
///
/// For authenticated callers the response carries whether they follow
/// this author.
pub async fn profile(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let author = find_author(&state, &path).await?;

    let posts = state
        .posts
        .page_by_author(author.id, query.number(), state.page_size)
        .await?;

    let following = match identity.0 {
        Some(caller) => Some(
            state
                .follows
                .find_pair(caller.user_id, author.id)
                .await?
                .is_some(),
        ),
        None => None,
    };

    Ok(HttpResponse::Ok().json(ProfileResponse {
        username: author.username,
        posts_count: posts.total_items,
        following,
        posts: render_page(&state, posts).await?,
    }))
}

/// POST /api/profiles/{username}/follow
pub async fn follow(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let author = find_author(&state, &path).await?;

    // Self-follow is rejected by the domain constructor.
    let edge = Follow::new(identity.user_id, author.id)?;

    if state
        .follows
        .find_pair(edge.user_id, edge.author_id)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Already following this author".to_string()));
    }

    // The unique (user, author) index backs up the check above.
    state.follows.insert(edge).await?;

    tracing::debug!(follower = %identity.username, author = %author.username, "Follow created");

    Ok(HttpResponse::Created().json(json!({ "following": true })))
}

/// DELETE /api/profiles/{username}/follow
pub async fn unfollow(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let author = find_author(&state, &path).await?;

    let removed = state.follows.delete_pair(identity.user_id, author.id).await?;
    if removed == 0 {
        return Err(AppError::NotFound(
            "You are not following this author".to_string(),
        ));
    }

    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/feed - posts by authors the caller follows, newest first.
pub async fn feed(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let author_ids = state.follows.following_ids(identity.user_id).await?;

    let posts = state
        .posts
        .page_by_authors(&author_ids, query.number(), state.page_size)
        .await?;

    Ok(HttpResponse::Ok().json(render_page(&state, posts).await?))
}
