use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of characters shown when a post is rendered as a short preview.
pub const PREVIEW_LEN: usize = 15;

/// Post entity - an authored text entry, optionally grouped and illustrated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    /// Optional topic group; `None` means the post is unaffiliated.
    pub group_id: Option<Uuid>,
    pub text: String,
    /// Storage path of the attached image, scoped under `posts/`.
    pub image: Option<String>,
    pub published_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post. The publish timestamp is assigned here.
    pub fn new(author_id: Uuid, text: String, group_id: Option<Uuid>, image: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            group_id,
            text,
            image,
            published_at: Utc::now(),
        }
    }

    /// Short preview of the post text, first [`PREVIEW_LEN`] characters.
    pub fn preview(&self) -> String {
        self.text.chars().take(PREVIEW_LEN).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_long_text() {
        let post = Post::new(
            Uuid::new_v4(),
            "Тестовый пост11111111111111111111111111111111".to_string(),
            None,
            None,
        );
        assert_eq!(post.preview(), "Тестовый пост11");
        assert_eq!(post.preview().chars().count(), PREVIEW_LEN);
    }

    #[test]
    fn preview_keeps_short_text_whole() {
        let post = Post::new(Uuid::new_v4(), "короткий".to_string(), None, None);
        assert_eq!(post.preview(), "короткий");
    }

    #[test]
    fn new_post_is_unaffiliated_by_default() {
        let post = Post::new(Uuid::new_v4(), "текст".to_string(), None, None);
        assert!(post.group_id.is_none());
        assert!(post.image.is_none());
    }
}
