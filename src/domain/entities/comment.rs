//! Comment Entity Implementation

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::errors::CommentError;

/// 댓글 엔티티
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: i64,
    pub content: String,
    /// 댓글이 달린 게시글 ID
    pub post_id: i64,
    pub created_by: String,
    pub created_at: DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    pub updated_at: DateTime,
}

impl Comment {
    pub fn new(id: i64, post_id: i64, content: String, created_by: String) -> Self {
        let now = DateTime::now();

        Self {
            id,
            content,
            post_id,
            created_by,
            created_at: now,
            updated_by: None,
            updated_at: now,
        }
    }

    /// 본문을 수정합니다. 작성자가 아니면 `CommentError::NotUpdatable`.
    pub fn update(&mut self, content: String, updated_by: String) -> Result<(), CommentError> {
        if updated_by != self.created_by {
            return Err(CommentError::NotUpdatable);
        }

        self.content = content;
        self.updated_by = Some(updated_by);
        self.updated_at = DateTime::now();
        Ok(())
    }

    pub fn ensure_deletable_by(&self, deleted_by: &str) -> Result<(), CommentError> {
        if deleted_by != self.created_by {
            return Err(CommentError::NotDeletable);
        }
        Ok(())
    }
}
