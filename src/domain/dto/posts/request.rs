//! 게시글 요청 DTO
//!
//! 생성/수정 본문 검증과 목록 검색 조건을 정의합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::utils::string_utils::{deserialize_optional_string, trim_all, validate_not_blank};

/// 게시글 하나에 붙일 수 있는 최대 태그 수
pub const MAX_TAGS: usize = 10;
/// 태그 이름 최대 길이
pub const MAX_TAG_LENGTH: usize = 30;

/// 게시글 생성 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostCreateRequest {
    #[validate(length(min = 1, max = 200, message = "제목은 1-200자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,

    #[validate(length(min = 1, message = "내용은 필수입니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub content: String,

    #[validate(length(min = 1, max = 50, message = "작성자는 1-50자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub created_by: String,

    #[serde(default)]
    #[validate(length(max = 10, message = "태그는 최대 10개까지 등록할 수 있습니다"))]
    #[validate(custom(function = "validate_tags"))]
    pub tags: Vec<String>,
}

impl PostCreateRequest {
    /// 작성자 이름과 태그 이름의 앞뒤 공백을 제거합니다.
    ///
    /// 저장되는 이름과 이후 작성자 비교/태그 검색에 쓰이는 이름이 같은 규칙을 따르도록
    /// 서비스가 저장 전에 호출합니다.
    pub fn normalized(mut self) -> Self {
        self.created_by = self.created_by.trim().to_string();
        self.tags = trim_all(self.tags);
        self
    }
}

/// 게시글 수정 요청
///
/// `tags`를 생략하면 빈 목록으로 간주되어 기존 태그가 모두 제거됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdateRequest {
    #[validate(length(min = 1, max = 200, message = "제목은 1-200자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,

    #[validate(length(min = 1, message = "내용은 필수입니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub content: String,

    #[validate(length(min = 1, max = 50, message = "수정자는 1-50자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub updated_by: String,

    #[serde(default)]
    #[validate(length(max = 10, message = "태그는 최대 10개까지 등록할 수 있습니다"))]
    #[validate(custom(function = "validate_tags"))]
    pub tags: Vec<String>,
}

impl PostUpdateRequest {
    /// 수정자 이름과 태그 이름의 앞뒤 공백을 제거합니다.
    pub fn normalized(mut self) -> Self {
        self.updated_by = self.updated_by.trim().to_string();
        self.tags = trim_all(self.tags);
        self
    }
}

/// 게시글 목록 검색 조건 (`?title=&createdBy=&tag=`)
///
/// 빈 문자열이나 공백만 있는 값은 조건 없음으로 처리됩니다.
/// `tag`가 있으면 `title`/`createdBy`보다 우선합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSearchRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub created_by: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub tag: Option<String>,
}

/// 게시글 삭제 쿼리 (`?createdBy=`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostQuery {
    pub created_by: String,
}

/// 각 태그 이름 검증 (1-30자, 공백 불가)
fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    for tag in tags {
        if tag.trim().is_empty() {
            return Err(ValidationError::new("blank_tag")
                .with_message("빈 태그는 등록할 수 없습니다".into()));
        }
        if tag.chars().count() > MAX_TAG_LENGTH {
            return Err(ValidationError::new("tag_too_long")
                .with_message("태그는 30자 이하여야 합니다".into()));
        }
    }
    Ok(())
}
