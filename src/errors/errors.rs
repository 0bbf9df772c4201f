//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 게시판 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 도메인 에러(`PostError`, `CommentError`)는 서비스 계층에서 발생하며
//! `From` 변환을 통해 `AppError`로 승격되어 HTTP 응답이 됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, PostError};
//!
//! async fn update_post(id: i64, request: PostUpdateRequest) -> Result<i64, AppError> {
//!     let mut post = post_repo.find_by_id(id).await?.ok_or(PostError::NotFound)?;
//!     post.update(request.title, request.content, request.updated_by)?;
//!     Ok(id)
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 게시판 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 작성자 불일치 등 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::RedisError(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::ValidationError(e.to_string())
    }
}

/// 게시글 도메인 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PostError {
    #[error("게시글을 찾을 수 없습니다.")]
    NotFound,

    #[error("게시글을 수정할 수 없습니다.")]
    NotUpdatable,

    #[error("게시글을 삭제할 수 없습니다.")]
    NotDeletable,
}

/// 댓글 도메인 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommentError {
    #[error("댓글을 찾을 수 없습니다.")]
    NotFound,

    #[error("댓글을 수정할 수 없습니다.")]
    NotUpdatable,

    #[error("댓글을 삭제할 수 없습니다.")]
    NotDeletable,
}

impl From<PostError> for AppError {
    fn from(e: PostError) -> Self {
        match e {
            PostError::NotFound => AppError::NotFound(e.to_string()),
            PostError::NotUpdatable | PostError::NotDeletable => {
                AppError::AuthorizationError(e.to_string())
            }
        }
    }
}

impl From<CommentError> for AppError {
    fn from(e: CommentError) -> Self {
        match e {
            CommentError::NotFound => AppError::NotFound(e.to_string()),
            CommentError::NotUpdatable | CommentError::NotDeletable => {
                AppError::AuthorizationError(e.to_string())
            }
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
