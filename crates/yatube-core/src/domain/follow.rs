use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Follow entity - a directed subscription edge between two users.
///
/// `user_id` follows `author_id`. The pair is unique at the storage level
/// and self-follows are rejected before persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Follow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Follow {
    /// Create a follow edge, rejecting self-follows.
    pub fn new(user_id: Uuid, author_id: Uuid) -> Result<Self, DomainError> {
        if user_id == author_id {
            return Err(DomainError::Validation(
                "You cannot follow yourself".to_string(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            author_id,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_links_user_to_author() {
        let user = Uuid::new_v4();
        let author = Uuid::new_v4();
        let follow = Follow::new(user, author).unwrap();
        assert_eq!(follow.user_id, user);
        assert_eq!(follow.author_id, author);
    }

    #[test]
    fn self_follow_is_rejected() {
        let user = Uuid::new_v4();
        let err = Follow::new(user, user).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
