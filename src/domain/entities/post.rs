//! Post Entity Implementation
//!
//! 게시글 엔티티와 작성자 검증 규칙을 정의합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::errors::PostError;

/// 게시글 엔티티
///
/// 태그, 댓글, 좋아요는 각자의 컬렉션에 `post_id`로 연결되어 저장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: i64,
    /// 제목
    pub title: String,
    /// 본문
    pub content: String,
    /// 작성자
    pub created_by: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 마지막 수정자
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Post {
    pub fn new(id: i64, title: String, content: String, created_by: String) -> Self {
        let now = DateTime::now();

        Self {
            id,
            title,
            content,
            created_by,
            created_at: now,
            updated_by: None,
            updated_at: now,
        }
    }

    /// 제목과 본문을 수정합니다.
    ///
    /// 작성자 본인만 수정할 수 있으며, 그렇지 않으면 `PostError::NotUpdatable`을 반환하고
    /// 엔티티는 변경되지 않습니다.
    pub fn update(&mut self, title: String, content: String, updated_by: String) -> Result<(), PostError> {
        if updated_by != self.created_by {
            return Err(PostError::NotUpdatable);
        }

        self.title = title;
        self.content = content;
        self.updated_by = Some(updated_by);
        self.updated_at = DateTime::now();
        Ok(())
    }

    /// 삭제 요청자가 작성자인지 확인합니다.
    pub fn ensure_deletable_by(&self, deleted_by: &str) -> Result<(), PostError> {
        if deleted_by != self.created_by {
            return Err(PostError::NotDeletable);
        }
        Ok(())
    }
}
