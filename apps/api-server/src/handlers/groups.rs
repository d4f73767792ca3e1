//! Group handlers - topic pages and group management.

use actix_web::{HttpResponse, web};

use yatube_core::domain::Group;
use yatube_core::forms::GroupForm;
use yatube_shared::dto::{GroupDetailResponse, GroupRequest, GroupResponse, PageQuery};

use crate::handlers::posts::render_page;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn group_response(group: Group) -> GroupResponse {
    GroupResponse {
        id: group.id,
        title: group.title,
        slug: group.slug,
        description: group.description,
    }
}

async fn find_group(state: &AppState, slug: &str) -> AppResult<Group> {
    state
        .groups
        .find_by_slug(slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Group '{}' not found", slug)))
}

/// GET /api/groups
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let groups = state.groups.list().await?;
    let rendered: Vec<GroupResponse> = groups.into_iter().map(group_response).collect();

    Ok(HttpResponse::Ok().json(rendered))
}

/// POST /api/groups - a duplicate slug is rejected by the storage layer.
pub async fn create(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<GroupRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let form = GroupForm {
        title: req.title,
        slug: req.slug,
        description: req.description,
    };

    let group = form.into_group()?;
    let saved = state.groups.insert(group).await?;

    tracing::debug!(slug = %saved.slug, "Group created");

    Ok(HttpResponse::Created().json(group_response(saved)))
}

/// GET /api/groups/{slug} - the group and a page of its posts.
pub async fn detail(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let group = find_group(&state, &path).await?;

    let posts = state
        .posts
        .page_by_group(group.id, query.number(), state.page_size)
        .await?;

    Ok(HttpResponse::Ok().json(GroupDetailResponse {
        group: group_response(group),
        posts: render_page(&state, posts).await?,
    }))
}

/// DELETE /api/groups/{slug} - posts of the group survive with group unset.
pub async fn delete(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let group = find_group(&state, &path).await?;

    state.groups.delete(group.id).await?;

    Ok(HttpResponse::NoContent().finish())
}
