//! 에러 처리 모듈
//!
//! [`errors`] 하위 모듈에 정의된 `AppError`와 도메인 에러들을 재노출합니다.

#[allow(clippy::module_inception)]
pub mod errors;

pub use errors::*;
