//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response containing a user's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Response containing authentication tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Request to create or edit a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRequest {
    pub text: String,
    /// Optional group assignment.
    #[serde(default)]
    pub group: Option<Uuid>,
    /// Optional image filename; the server stores it under a posts-scoped path.
    #[serde(default)]
    pub image: Option<String>,
}

/// A post as rendered in listings and detail pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub text: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub published_at: DateTime<Utc>,
}

/// Post detail page: the post plus its comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailResponse {
    pub post: PostResponse,
    pub comments: Vec<CommentResponse>,
}

/// Request to comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRequest {
    pub text: String,
}

/// A comment as rendered under a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub text: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Request to create a group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupRequest {
    pub title: String,
    pub slug: String,
    pub description: String,
}

/// A group as rendered in listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
}

/// Group page: the group plus a page of its posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDetailResponse {
    pub group: GroupResponse,
    pub posts: crate::response::PageResponse<PostResponse>,
}

/// Author profile page: the author plus a page of their posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub username: String,
    pub posts_count: u64,
    /// Whether the requesting user follows this author; absent for
    /// anonymous requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub following: Option<bool>,
    pub posts: crate::response::PageResponse<PostResponse>,
}

/// Query string for paginated listings: `?page=N`, 1-based.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<u64>,
}

impl PageQuery {
    /// The requested page, defaulting to the first.
    pub fn number(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::PageQuery;

    #[test]
    fn page_query_defaults_to_the_first_page() {
        assert_eq!(PageQuery { page: None }.number(), 1);
    }

    #[test]
    fn page_query_clamps_zero_to_the_first_page() {
        assert_eq!(PageQuery { page: Some(0) }.number(), 1);
    }

    #[test]
    fn page_query_passes_the_requested_page_through() {
        assert_eq!(PageQuery { page: Some(2) }.number(), 2);
    }
}
