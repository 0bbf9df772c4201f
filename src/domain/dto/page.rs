//! 페이지네이션 요청/응답
//!
//! 응답 JSON은 다음 형태를 가집니다.
//!
//! ```json
//! {
//!   "content": [...],
//!   "number": 0,
//!   "size": 20,
//!   "totalElements": 41,
//!   "totalPages": 3,
//!   "numberOfElements": 20,
//!   "first": true,
//!   "last": false,
//!   "empty": false
//! }
//! ```

use serde::{Deserialize, Serialize};

/// MongoDB `skip`이 받을 수 있는 최대 오프셋
const MAX_OFFSET: u64 = i64::MAX as u64;

/// `?page=&size=` 쿼리 파라미터
///
/// `page`는 0부터 시작합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub size: Option<u64>,
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
        }
    }

    /// 기본값과 상한을 적용한 페이지 정보로 변환합니다.
    ///
    /// - `page` 없음 → 0
    /// - `size` 없음 → `default_size`
    /// - `size`는 `1..=max_size` 범위로 보정
    /// - `page`는 건너뛸 문서 수가 `i64::MAX`를 넘지 않도록 제한
    pub fn normalize(&self, default_size: u64, max_size: u64) -> Pageable {
        let max_size = max_size.max(1);
        let size = self.size.unwrap_or(default_size).clamp(1, max_size);
        let max_page = MAX_OFFSET / size;

        Pageable {
            page: self.page.unwrap_or(0).min(max_page),
            size,
        }
    }
}

/// 보정이 끝난 페이지 정보
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pageable {
    pub page: u64,
    pub size: u64,
}

impl Pageable {
    /// 건너뛸 문서 수
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

/// 페이지 응답
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number_of_elements: u64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, pageable: Pageable, total_elements: u64) -> Self {
        let size = pageable.size.max(1);
        let total_pages = total_elements.div_ceil(size);
        let number_of_elements = content.len() as u64;

        Self {
            empty: content.is_empty(),
            content,
            number: pageable.page,
            size,
            total_elements,
            total_pages,
            number_of_elements,
            first: pageable.page == 0,
            last: pageable.page.saturating_add(1) >= total_pages,
        }
    }
}
