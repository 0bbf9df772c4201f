//! Tag Entity Implementation

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 게시글 태그
///
/// 태그 검색 페이지는 이 컬렉션을 기준으로 조회됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    #[serde(rename = "_id")]
    pub id: i64,
    pub name: String,
    pub post_id: i64,
    pub created_by: String,
    pub created_at: DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    pub updated_at: DateTime,
}

impl Tag {
    pub fn new(id: i64, name: String, post_id: i64, created_by: String) -> Self {
        let now = DateTime::now();

        Self {
            id,
            name,
            post_id,
            created_by,
            created_at: now,
            updated_by: None,
            updated_at: now,
        }
    }
}

/// 저장된 태그 목록과 요청된 태그 이름 목록이 다른지 비교합니다.
///
/// 이름과 순서가 모두 같을 때만 `false`입니다.
pub fn tags_changed(current: &[Tag], requested: &[String]) -> bool {
    current.len() != requested.len()
        || current
            .iter()
            .zip(requested)
            .any(|(tag, name)| tag.name != *name)
}
