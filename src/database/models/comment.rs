use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub text: String,
    /// Movie the comment belongs to; must resolve at creation time.
    pub movie: Uuid,
    /// Authoring user; mutations are gated on this field.
    pub owner: Uuid,
    pub likes: Vec<Uuid>,
    pub unlikes: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewComment {
    pub text: String,
    pub movie: Uuid,
}

/// Only the text is client-editable; owner, movie and the reaction lists
/// are managed by their own endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct CommentUpdate {
    pub text: Option<String>,
}

impl CommentUpdate {
    pub fn apply(self, comment: &mut Comment) {
        if let Some(text) = self.text {
            comment.text = text;
        }
    }
}
