//! Post and comment handlers - create, edit, list, detail.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use yatube_core::domain::{Comment, Post};
use yatube_core::forms::{CommentForm, PostForm};
use yatube_core::ports::Page;
use yatube_shared::dto::{
    CommentRequest, CommentResponse, GroupResponse, PageQuery, PostDetailResponse, PostRequest,
    PostResponse,
};
use yatube_shared::response::PageResponse;

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Resolve author and group references so a post can be rendered.
pub(crate) async fn render_post(state: &AppState, post: &Post) -> AppResult<PostResponse> {
    let author = state
        .users
        .find_by_id(post.author_id)
        .await?
        .ok_or_else(|| AppError::Internal(format!("post {} has no author row", post.id)))?;

    let group = match post.group_id {
        Some(group_id) => state.groups.find_by_id(group_id).await?.map(|g| GroupResponse {
            id: g.id,
            title: g.title,
            slug: g.slug,
            description: g.description,
        }),
        None => None,
    };

    Ok(PostResponse {
        id: post.id,
        text: post.text.clone(),
        author: author.username,
        group,
        image: post.image.clone(),
        published_at: post.published_at,
    })
}

/// Render one page of posts, keeping the paginator totals.
pub(crate) async fn render_page(
    state: &AppState,
    page: Page<Post>,
) -> AppResult<PageResponse<PostResponse>> {
    let mut items = Vec::with_capacity(page.items.len());
    for post in &page.items {
        items.push(render_post(state, post).await?);
    }

    Ok(PageResponse {
        items,
        page: page.number,
        total_items: page.total_items,
        total_pages: page.total_pages,
    })
}

pub(crate) async fn render_comment(
    state: &AppState,
    comment: &Comment,
) -> AppResult<CommentResponse> {
    let author = state
        .users
        .find_by_id(comment.author_id)
        .await?
        .ok_or_else(|| AppError::Internal(format!("comment {} has no author row", comment.id)))?;

    Ok(CommentResponse {
        id: comment.id,
        text: comment.text.clone(),
        author: author.username,
        created_at: comment.created_at,
    })
}

fn form_from(req: PostRequest) -> PostForm {
    PostForm {
        text: req.text,
        group_id: req.group,
        image: req.image,
    }
}

/// Reject group references that point at no existing group.
async fn check_group_exists(state: &AppState, group_id: Option<Uuid>) -> AppResult<()> {
    if let Some(group_id) = group_id {
        if state.groups.find_by_id(group_id).await?.is_none() {
            return Err(AppError::BadRequest("Group does not exist".to_string()));
        }
    }
    Ok(())
}

async fn find_post(state: &AppState, post_id: Uuid) -> AppResult<Post> {
    state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))
}

/// GET /api/posts - the site-wide index, newest first.
pub async fn index(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let page = state
        .posts
        .page_recent(query.number(), state.page_size)
        .await?;

    Ok(HttpResponse::Ok().json(render_page(&state, page).await?))
}

/// POST /api/posts - create a post for the authenticated author.
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let form = form_from(body.into_inner());
    check_group_exists(&state, form.group_id).await?;

    let post = form.into_post(identity.user_id)?;
    let saved = state.posts.insert(post).await?;

    tracing::debug!(post_id = %saved.id, author = %identity.username, "Post created");

    Ok(HttpResponse::Created().json(render_post(&state, &saved).await?))
}

/// GET /api/posts/{post_id} - post detail with its comments.
pub async fn detail(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;

    let comments = state.comments.find_by_post(post.id).await?;
    let mut rendered_comments = Vec::with_capacity(comments.len());
    for comment in &comments {
        rendered_comments.push(render_comment(&state, comment).await?);
    }

    Ok(HttpResponse::Ok().json(PostDetailResponse {
        post: render_post(&state, &post).await?,
        comments: rendered_comments,
    }))
}

/// PUT /api/posts/{post_id} - edit; only the author may edit their post.
pub async fn edit(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let mut post = find_post(&state, path.into_inner()).await?;

    if post.author_id != identity.user_id {
        return Err(AppError::Forbidden);
    }

    let form = form_from(body.into_inner());
    check_group_exists(&state, form.group_id).await?;
    form.apply_to(&mut post)?;

    let saved = state.posts.update(post).await?;

    Ok(HttpResponse::Ok().json(render_post(&state, &saved).await?))
}

/// DELETE /api/posts/{post_id} - only the author may delete their post.
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;

    if post.author_id != identity.user_id {
        return Err(AppError::Forbidden);
    }

    state.posts.delete(post.id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/posts/{post_id}/comments
pub async fn list_comments(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;

    let comments = state.comments.find_by_post(post.id).await?;
    let mut rendered = Vec::with_capacity(comments.len());
    for comment in &comments {
        rendered.push(render_comment(&state, comment).await?);
    }

    Ok(HttpResponse::Ok().json(rendered))
}

/// POST /api/posts/{post_id}/comments - comment as the authenticated user.
pub async fn add_comment(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;

    let form = CommentForm {
        text: body.into_inner().text,
    };
    let comment = form.into_comment(post.id, identity.user_id)?;
    let saved = state.comments.insert(comment).await?;

    Ok(HttpResponse::Created().json(render_comment(&state, &saved).await?))
}
