//! Form validation for posts, comments and groups.
//!
//! Forms sit between the HTTP layer and the domain: they carry the raw
//! submitted values, validate them field by field, and produce persist-ready
//! entities. A failed validation returns [`FormErrors`] with one entry per
//! offending field so the caller can re-render field-specific messages.

use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Comment, Group, Post};

/// UI label and help text for the post text field.
pub const POST_TEXT_LABEL: &str = "Текст поста";
pub const POST_TEXT_HELP: &str = "Заполните текст поста";
/// UI label and help text for the post group field.
pub const POST_GROUP_LABEL: &str = "Группа";
pub const POST_GROUP_HELP: &str = "Выберите группу";
/// UI label and help text for the comment text field.
pub const COMMENT_TEXT_LABEL: &str = "Текст комментария";
pub const COMMENT_TEXT_HELP: &str = "Напишите ваш комментарий";

/// Message shown when a required text field is left empty.
pub const EMPTY_TEXT_MESSAGE: &str = "А кто поле будет заполнять, Пушкин?";

/// Attached images are stored under this posts-scoped prefix.
pub const IMAGE_PREFIX: &str = "posts/";

/// A single field-level validation failure, echoing the offending value.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
    pub value: String,
}

/// All field errors collected from one form submission.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormErrors(pub Vec<FieldError>);

impl FormErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>, value: &str) {
        self.0.push(FieldError {
            field,
            message: message.into(),
            value: value.to_string(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Flatten to "field: message" strings for the error response body.
    pub fn messages(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect()
    }
}

fn require_text(errors: &mut FormErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(field, EMPTY_TEXT_MESSAGE, value);
    }
}

/// Prefix an image filename with the posts storage path, once.
fn image_path(name: &str) -> String {
    if name.starts_with(IMAGE_PREFIX) {
        name.to_string()
    } else {
        format!("{IMAGE_PREFIX}{name}")
    }
}

/// Form for creating or editing a post.
#[derive(Debug, Clone, Default)]
pub struct PostForm {
    pub text: String,
    /// Optional group; when omitted the post stays unaffiliated.
    pub group_id: Option<Uuid>,
    /// Optional image filename; stored under [`IMAGE_PREFIX`].
    pub image: Option<String>,
}

impl PostForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        require_text(&mut errors, "text", &self.text);
        errors.into_result()
    }

    /// Validate and build a new post for `author_id`.
    pub fn into_post(self, author_id: Uuid) -> Result<Post, FormErrors> {
        self.validate()?;
        let image = self.image.as_deref().map(image_path);
        Ok(Post::new(author_id, self.text, self.group_id, image))
    }

    /// Validate and apply the edit to an existing post.
    pub fn apply_to(self, post: &mut Post) -> Result<(), FormErrors> {
        self.validate()?;
        post.text = self.text;
        post.group_id = self.group_id;
        if let Some(name) = self.image.as_deref() {
            post.image = Some(image_path(name));
        }
        Ok(())
    }
}

/// Form for creating a comment on a post.
#[derive(Debug, Clone, Default)]
pub struct CommentForm {
    pub text: String,
}

impl CommentForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        require_text(&mut errors, "text", &self.text);
        errors.into_result()
    }

    pub fn into_comment(self, post_id: Uuid, author_id: Uuid) -> Result<Comment, FormErrors> {
        self.validate()?;
        Ok(Comment::new(post_id, author_id, self.text))
    }
}

/// Form for creating a group. Slug uniqueness is enforced by the storage
/// layer; the form only checks shape.
#[derive(Debug, Clone, Default)]
pub struct GroupForm {
    pub title: String,
    pub slug: String,
    pub description: String,
}

impl GroupForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        require_text(&mut errors, "title", &self.title);
        require_text(&mut errors, "description", &self.description);
        if self.slug.trim().is_empty() {
            errors.push("slug", EMPTY_TEXT_MESSAGE, &self.slug);
        } else if !self
            .slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            errors.push(
                "slug",
                "Enter a valid slug consisting of letters, numbers, underscores or hyphens",
                &self.slug,
            );
        }
        errors.into_result()
    }

    pub fn into_group(self) -> Result<Group, FormErrors> {
        self.validate()?;
        Ok(Group::new(self.title, self.slug, self.description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_form_rejects_empty_text() {
        let form = PostForm {
            text: String::new(),
            ..Default::default()
        };
        let errors = form.into_post(Uuid::new_v4()).unwrap_err();
        assert_eq!(errors.0.len(), 1);
        assert_eq!(errors.0[0].field, "text");
        assert_eq!(errors.0[0].message, EMPTY_TEXT_MESSAGE);
        assert_eq!(errors.0[0].value, "");
    }

    #[test]
    fn post_form_rejects_whitespace_only_text() {
        let form = PostForm {
            text: "   ".to_string(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.0[0].value, "   ");
    }

    #[test]
    fn post_form_without_group_builds_unaffiliated_post() {
        let form = PostForm {
            text: "Текст поста".to_string(),
            ..Default::default()
        };
        let post = form.into_post(Uuid::new_v4()).unwrap();
        assert_eq!(post.text, "Текст поста");
        assert!(post.group_id.is_none());
    }

    #[test]
    fn post_form_keeps_group_assignment() {
        let group_id = Uuid::new_v4();
        let author_id = Uuid::new_v4();
        let form = PostForm {
            text: "Текст поста".to_string(),
            group_id: Some(group_id),
            image: None,
        };
        let post = form.into_post(author_id).unwrap();
        assert_eq!(post.group_id, Some(group_id));
        assert_eq!(post.author_id, author_id);
    }

    #[test]
    fn post_form_scopes_image_under_posts_path() {
        let form = PostForm {
            text: "с картинкой".to_string(),
            group_id: None,
            image: Some("small.gif".to_string()),
        };
        let post = form.into_post(Uuid::new_v4()).unwrap();
        assert_eq!(post.image.as_deref(), Some("posts/small.gif"));
    }

    #[test]
    fn post_form_edit_replaces_text_and_group() {
        let author = Uuid::new_v4();
        let first_group = Uuid::new_v4();
        let second_group = Uuid::new_v4();
        let mut post = Post::new(author, "Текст поста".to_string(), Some(first_group), None);

        let form = PostForm {
            text: "Текст поста edited".to_string(),
            group_id: Some(second_group),
            image: None,
        };
        form.apply_to(&mut post).unwrap();

        assert_eq!(post.text, "Текст поста edited");
        assert_eq!(post.group_id, Some(second_group));
    }

    #[test]
    fn post_form_edit_rejects_empty_text_without_touching_post() {
        let mut post = Post::new(Uuid::new_v4(), "оригинал".to_string(), None, None);
        let form = PostForm::default();
        assert!(form.apply_to(&mut post).is_err());
        assert_eq!(post.text, "оригинал");
    }

    #[test]
    fn comment_form_rejects_empty_text() {
        let form = CommentForm::default();
        let errors = form
            .into_comment(Uuid::new_v4(), Uuid::new_v4())
            .unwrap_err();
        assert_eq!(errors.0[0].field, "text");
        assert_eq!(errors.0[0].message, EMPTY_TEXT_MESSAGE);
    }

    #[test]
    fn comment_form_builds_comment_for_post() {
        let post_id = Uuid::new_v4();
        let form = CommentForm {
            text: "Комментарий".to_string(),
        };
        let comment = form.into_comment(post_id, Uuid::new_v4()).unwrap();
        assert_eq!(comment.post_id, Some(post_id));
        assert_eq!(comment.text, "Комментарий");
    }

    #[test]
    fn group_form_requires_all_fields() {
        let form = GroupForm::default();
        let errors = form.validate().unwrap_err();
        let fields: Vec<_> = errors.0.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "description", "slug"]);
    }

    #[test]
    fn group_form_rejects_malformed_slug() {
        let form = GroupForm {
            title: "группа".to_string(),
            slug: "Тестовый слаг".to_string(),
            description: "группа тестов".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.0.len(), 1);
        assert_eq!(errors.0[0].field, "slug");
        assert_eq!(errors.0[0].value, "Тестовый слаг");
    }

    #[test]
    fn group_form_accepts_valid_slug() {
        let form = GroupForm {
            title: "группа".to_string(),
            slug: "group_test-2".to_string(),
            description: "группа тестов".to_string(),
        };
        let group = form.into_group().unwrap();
        assert_eq!(group.slug, "group_test-2");
    }
}
