//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DbConn, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select};
use uuid::Uuid;

use yatube_core::domain::{Comment, Follow, Group, Post, User};
use yatube_core::error::RepoError;
use yatube_core::ports::{
    CommentRepository, FollowRepository, GroupRepository, Page, PostRepository, UserRepository,
};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::follow::{self, Entity as FollowEntity};
use super::entity::group::{self, Entity as GroupEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL group repository.
pub type PostgresGroupRepository = PostgresBaseRepository<GroupEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

/// PostgreSQL follow repository.
pub type PostgresFollowRepository = PostgresBaseRepository<FollowEntity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Mask email for logging to avoid PII in logs
        let masked = if let Some(at_pos) = email.find('@') {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = match local.chars().next() {
                Some(first) if local.chars().count() > 1 => format!("{}***", first),
                _ => "***".to_string(),
            };
            format!("{}{}", masked_local, domain)
        } else {
            "***".to_string()
        };
        tracing::debug!(user_email = %masked, "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl GroupRepository for PostgresGroupRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Group>, RepoError> {
        let result = GroupEntity::find()
            .filter(group::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Group>, RepoError> {
        let result = GroupEntity::find()
            .order_by_asc(group::Column::Title)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

/// Run one post listing query through the paginator, newest first.
async fn paginate_posts(
    db: &DbConn,
    select: Select<PostEntity>,
    page: u64,
    per_page: u64,
) -> Result<Page<Post>, RepoError> {
    let select = select
        .order_by_desc(post::Column::PublishedAt)
        .order_by_asc(post::Column::AuthorId);

    let paginator = select.paginate(db, per_page);
    let totals = paginator
        .num_items_and_pages()
        .await
        .map_err(map_db_err)?;
    let items = paginator
        .fetch_page(page.saturating_sub(1))
        .await
        .map_err(map_db_err)?;

    Ok(Page {
        items: items.into_iter().map(Into::into).collect(),
        number: page,
        total_items: totals.number_of_items,
        total_pages: totals.number_of_pages,
    })
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn page_recent(&self, page: u64, per_page: u64) -> Result<Page<Post>, RepoError> {
        paginate_posts(&self.db, PostEntity::find(), page, per_page).await
    }

    async fn page_by_group(
        &self,
        group_id: Uuid,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Post>, RepoError> {
        let select = PostEntity::find().filter(post::Column::GroupId.eq(group_id));
        paginate_posts(&self.db, select, page, per_page).await
    }

    async fn page_by_author(
        &self,
        author_id: Uuid,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Post>, RepoError> {
        let select = PostEntity::find().filter(post::Column::AuthorId.eq(author_id));
        paginate_posts(&self.db, select, page, per_page).await
    }

    async fn page_by_authors(
        &self,
        author_ids: &[Uuid],
        page: u64,
        per_page: u64,
    ) -> Result<Page<Post>, RepoError> {
        // A feed with no followed authors is empty; skip the query.
        if author_ids.is_empty() {
            return Ok(Page {
                items: Vec::new(),
                number: page,
                total_items: 0,
                total_pages: 0,
            });
        }

        let select =
            PostEntity::find().filter(post::Column::AuthorId.is_in(author_ids.iter().copied()));
        paginate_posts(&self.db, select, page, per_page).await
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl FollowRepository for PostgresFollowRepository {
    async fn find_pair(
        &self,
        user_id: Uuid,
        author_id: Uuid,
    ) -> Result<Option<Follow>, RepoError> {
        let result = FollowEntity::find()
            .filter(follow::Column::UserId.eq(user_id))
            .filter(follow::Column::AuthorId.eq(author_id))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn delete_pair(&self, user_id: Uuid, author_id: Uuid) -> Result<u64, RepoError> {
        let result = FollowEntity::delete_many()
            .filter(follow::Column::UserId.eq(user_id))
            .filter(follow::Column::AuthorId.eq(author_id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }

    async fn following_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, RepoError> {
        let result = FollowEntity::find()
            .filter(follow::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(|f| f.author_id).collect())
    }
}
