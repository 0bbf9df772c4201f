//! 데이터 전송 객체 (Request/Response)
//!
//! HTTP 경계에서 사용하는 요청/응답 구조체입니다. JSON 필드는 camelCase를 사용합니다.

pub mod page;
pub mod posts;
pub mod comments;
pub mod likes;

pub use page::{Page, PageRequest, Pageable};
