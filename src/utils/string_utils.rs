//! # 문자열 유틸리티
//!
//! 요청 파라미터 정리와 검증에 쓰이는 공통 함수들입니다.

use serde::Deserialize;
use validator::ValidationError;
use crate::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string("  harris  ", "deletedBy").unwrap(), "harris");
/// assert!(validate_required_string("   ", "deletedBy").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde 역직렬화 함수
///
/// 검색 조건처럼 비어 있으면 "조건 없음"으로 취급해야 하는 필드에 사용합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct PostSearchRequest {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     title: Option<String>,
/// }
///
/// // ?title=        → None
/// // ?title=%20abc  → Some("abc")
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 공백만 있는 문자열을 거부하는 `validator` 커스텀 규칙
///
/// ```rust,ignore
/// #[validate(custom(function = "validate_not_blank"))]
/// pub created_by: String,
/// ```
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("공백만 입력할 수 없습니다".into()));
    }
    Ok(())
}

/// 문자열 목록의 각 항목 앞뒤 공백을 제거합니다.
pub fn trim_all(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| value.trim().to_string())
        .collect()
}
