//! 좋아요 요청/응답 DTO

use serde::{Deserialize, Serialize};

/// 좋아요 생성 쿼리 (`?createdBy=`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLikeQuery {
    pub created_by: String,
}

/// 좋아요 수 응답
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LikeCountResponse {
    pub post_id: i64,
    pub like_count: i64,
}
