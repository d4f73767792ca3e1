#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr, Value};
    use uuid::Uuid;

    use crate::database::entity::{comment, follow, group, post, user};
    use crate::database::postgres_repo::{
        PostgresCommentRepository, PostgresFollowRepository, PostgresGroupRepository,
        PostgresPostRepository, PostgresUserRepository,
    };
    use yatube_core::domain::{Group, Post};
    use yatube_core::error::RepoError;
    use yatube_core::ports::{
        BaseRepository, CommentRepository, FollowRepository, GroupRepository, PostRepository,
        UserRepository,
    };

    fn post_rows(count: usize, author_id: Uuid) -> Vec<post::Model> {
        let now = Utc::now();
        (0..count)
            .map(|_| post::Model {
                id: Uuid::new_v4(),
                author_id,
                group_id: None,
                text: "Тестовый текст".to_owned(),
                image: None,
                published_at: now.into(),
            })
            .collect()
    }

    // The paginator's count query selects a single `num_items` column.
    fn count_row(total: i64) -> BTreeMap<&'static str, Value> {
        let mut row = BTreeMap::new();
        row.insert("num_items", Value::BigInt(Some(total)));
        row
    }

    #[tokio::test]
    async fn find_post_by_id() {
        let post_id = Uuid::new_v4();
        let author_id = Uuid::new_v4();
        let now = Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post::Model {
                id: post_id,
                author_id,
                group_id: None,
                text: "Тестовый текст".to_owned(),
                image: None,
                published_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.text, "Тестовый текст");
        assert_eq!(post.id, post_id);
        assert!(post.group_id.is_none());
    }

    #[tokio::test]
    async fn find_group_by_slug() {
        let group_id = Uuid::new_v4();
        let now = Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![group::Model {
                id: group_id,
                title: "группа".to_owned(),
                slug: "group_test".to_owned(),
                description: "группа тестов".to_owned(),
                created_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresGroupRepository::new(db);

        let result: Option<Group> = repo.find_by_slug("group_test").await.unwrap();

        let group = result.unwrap();
        assert_eq!(group.slug, "group_test");
        assert_eq!(group.id, group_id);
    }

    #[tokio::test]
    async fn find_user_by_username() {
        let user_id = Uuid::new_v4();
        let now = Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user::Model {
                id: user_id,
                username: "author".to_owned(),
                email: "author@example.com".to_owned(),
                password_hash: "hash".to_owned(),
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let result = repo.find_by_username("author").await.unwrap();

        assert_eq!(result.unwrap().id, user_id);
    }

    #[tokio::test]
    async fn find_user_by_email_with_multibyte_local_part() {
        let user_id = Uuid::new_v4();
        let now = Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user::Model {
                id: user_id,
                username: "автор".to_owned(),
                email: "ёжик@example.com".to_owned(),
                password_hash: "hash".to_owned(),
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let result = repo.find_by_email("ёжик@example.com").await.unwrap();

        assert_eq!(result.unwrap().id, user_id);
    }

    #[tokio::test]
    async fn first_page_of_thirteen_posts_holds_ten() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(13)]])
            .append_query_results(vec![post_rows(10, Uuid::new_v4())])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let page = repo.page_recent(1, 10).await.unwrap();

        assert_eq!(page.number, 1);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total_items, 13);
        assert_eq!(page.total_pages, 2);
    }

    #[tokio::test]
    async fn second_page_of_thirteen_posts_holds_the_remainder() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(13)]])
            .append_query_results(vec![post_rows(3, Uuid::new_v4())])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let page = repo.page_recent(2, 10).await.unwrap();

        assert_eq!(page.number, 2);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.total_items, 13);
        assert_eq!(page.total_pages, 2);
    }

    #[tokio::test]
    async fn insert_duplicate_group_slug_is_a_constraint_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"groups_slug_key\"".to_owned(),
            ))])
            .into_connection();

        let repo = PostgresGroupRepository::new(db);
        let group = Group::new(
            "группа2".to_owned(),
            "group_test".to_owned(),
            "дубликат слага".to_owned(),
        );

        let err = repo.insert(group).await.unwrap_err();

        assert!(matches!(err, RepoError::Constraint(_)));
    }

    #[tokio::test]
    async fn delete_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let err = BaseRepository::<Post, Uuid>::delete(&repo, Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn comments_of_post_come_back_in_order() {
        let post_id = Uuid::new_v4();
        let author_id = Uuid::new_v4();
        let now = Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                comment::Model {
                    id: Uuid::new_v4(),
                    post_id: Some(post_id),
                    author_id,
                    text: "первый".to_owned(),
                    created_at: now.into(),
                },
                comment::Model {
                    id: Uuid::new_v4(),
                    post_id: Some(post_id),
                    author_id,
                    text: "второй".to_owned(),
                    created_at: now.into(),
                },
            ]])
            .into_connection();

        let repo = PostgresCommentRepository::new(db);

        let comments = repo.find_by_post(post_id).await.unwrap();

        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].text, "первый");
        assert_eq!(comments[1].text, "второй");
    }

    #[tokio::test]
    async fn find_follow_pair_returns_edge() {
        let user_id = Uuid::new_v4();
        let author_id = Uuid::new_v4();
        let now = Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![follow::Model {
                id: Uuid::new_v4(),
                user_id,
                author_id,
                created_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresFollowRepository::new(db);

        let edge = repo.find_pair(user_id, author_id).await.unwrap().unwrap();

        assert_eq!(edge.user_id, user_id);
        assert_eq!(edge.author_id, author_id);
    }

    #[tokio::test]
    async fn delete_follow_pair_reports_removed_edges() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresFollowRepository::new(db);

        let removed = repo
            .delete_pair(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap();

        assert_eq!(removed, 1);
    }

    #[tokio::test]
    async fn following_ids_lists_followed_authors() {
        let user_id = Uuid::new_v4();
        let first_author = Uuid::new_v4();
        let second_author = Uuid::new_v4();
        let now = Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                follow::Model {
                    id: Uuid::new_v4(),
                    user_id,
                    author_id: first_author,
                    created_at: now.into(),
                },
                follow::Model {
                    id: Uuid::new_v4(),
                    user_id,
                    author_id: second_author,
                    created_at: now.into(),
                },
            ]])
            .into_connection();

        let repo = PostgresFollowRepository::new(db);

        let ids = repo.following_ids(user_id).await.unwrap();

        assert_eq!(ids, vec![first_author, second_author]);
    }
}
