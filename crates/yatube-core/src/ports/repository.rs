use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Comment, Follow, Group, Post, User};
use crate::error::RepoError;

/// One page of a listing, with the totals the paginator needs.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number this page was fetched for.
    pub number: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity. IDs are generated by the domain, so inserts
    /// and updates are distinct operations.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Update an existing entity.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific lookups.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;
}

/// Group repository. Slug uniqueness surfaces as [`RepoError::Constraint`]
/// from `insert`.
#[async_trait]
pub trait GroupRepository: BaseRepository<Group, Uuid> {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Group>, RepoError>;

    async fn list(&self) -> Result<Vec<Group>, RepoError>;
}

/// Post repository. All listings are newest-first and paginated.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// The site-wide index: every post, newest first.
    async fn page_recent(&self, page: u64, per_page: u64) -> Result<Page<Post>, RepoError>;

    /// Posts belonging to one group.
    async fn page_by_group(
        &self,
        group_id: Uuid,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Post>, RepoError>;

    /// Posts authored by one user.
    async fn page_by_author(
        &self,
        author_id: Uuid,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Post>, RepoError>;

    /// The personalized feed: posts by the given authors only.
    async fn page_by_authors(
        &self,
        author_ids: &[Uuid],
        page: u64,
        per_page: u64,
    ) -> Result<Page<Post>, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, Uuid> {
    /// Comments under a post, oldest first.
    async fn find_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError>;
}

/// Follow repository. The `(user, author)` pair is unique; inserting a
/// duplicate surfaces as [`RepoError::Constraint`] from `insert`.
#[async_trait]
pub trait FollowRepository: BaseRepository<Follow, Uuid> {
    /// Look up the edge for a follower/author pair.
    async fn find_pair(&self, user_id: Uuid, author_id: Uuid)
    -> Result<Option<Follow>, RepoError>;

    /// Remove the edge(s) for a follower/author pair. Returns how many
    /// edges were deleted.
    async fn delete_pair(&self, user_id: Uuid, author_id: Uuid) -> Result<u64, RepoError>;

    /// IDs of every author the user follows.
    async fn following_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, RepoError>;
}
