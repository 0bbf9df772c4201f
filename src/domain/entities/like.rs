use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 게시글 좋아요 기록
///
/// 좋아요 수는 이 컬렉션의 `post_id`별 문서 수입니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Like {
    #[serde(rename = "_id")]
    pub id: i64,
    pub post_id: i64,
    pub created_by: String,
    pub created_at: DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    pub updated_at: DateTime,
}

impl Like {
    pub fn new(id: i64, post_id: i64, created_by: String, created_at: DateTime) -> Self {
        Self {
            id,
            post_id,
            created_by,
            created_at,
            updated_by: None,
            updated_at: created_at,
        }
    }
}
