use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::string_utils::validate_not_blank;

/// 댓글 생성 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreateRequest {
    #[validate(length(min = 1, message = "내용은 필수입니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub content: String,

    #[validate(length(min = 1, max = 50, message = "작성자는 1-50자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub created_by: String,
}

impl CommentCreateRequest {
    /// 작성자 이름의 앞뒤 공백을 제거합니다.
    pub fn normalized(mut self) -> Self {
        self.created_by = self.created_by.trim().to_string();
        self
    }
}

/// 댓글 수정 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommentUpdateRequest {
    #[validate(length(min = 1, message = "내용은 필수입니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub content: String,

    #[validate(length(min = 1, max = 50, message = "수정자는 1-50자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub updated_by: String,
}

impl CommentUpdateRequest {
    pub fn normalized(mut self) -> Self {
        self.updated_by = self.updated_by.trim().to_string();
        self
    }
}

/// 댓글 삭제 쿼리 (`?deletedBy=`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCommentQuery {
    pub deleted_by: String,
}
