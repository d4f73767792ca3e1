//! Application state - shared across all handlers.

use std::sync::Arc;

use yatube_core::error::RepoError;
use yatube_core::ports::{
    CommentRepository, FollowRepository, GroupRepository, PostRepository, UserRepository,
};
use yatube_infra::database::{
    DatabaseConfig, PostgresCommentRepository, PostgresFollowRepository, PostgresGroupRepository,
    PostgresPostRepository, PostgresUserRepository, connect,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub groups: Arc<dyn GroupRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub follows: Arc<dyn FollowRepository>,
    /// Posts per page for all paginated listings.
    pub page_size: u64,
}

impl AppState {
    /// Connect to the database and wire up the repositories.
    pub async fn new(db_config: &DatabaseConfig, page_size: u64) -> Result<Self, RepoError> {
        let db = connect(db_config).await?;

        let state = Self {
            users: Arc::new(PostgresUserRepository::new(db.clone())),
            groups: Arc::new(PostgresGroupRepository::new(db.clone())),
            posts: Arc::new(PostgresPostRepository::new(db.clone())),
            comments: Arc::new(PostgresCommentRepository::new(db.clone())),
            follows: Arc::new(PostgresFollowRepository::new(db)),
            page_size,
        };

        tracing::info!("Application state initialized");

        Ok(state)
    }
}
