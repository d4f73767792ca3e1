use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Comment entity - a reply attached to a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    /// The commented post. Nullable at the storage level; a comment whose
    /// post is deleted is removed by the cascade, not orphaned.
    pub post_id: Option<Uuid>,
    pub author_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(post_id: Uuid, author_id: Uuid, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            post_id: Some(post_id),
            author_id,
            text,
            created_at: Utc::now(),
        }
    }
}
