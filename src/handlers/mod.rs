//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 입력 검증 후 서비스 싱글톤을 호출하고, 결과를 JSON 응답으로 변환합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                           ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                      ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                    ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`posts`**: 게시글 생성/수정/삭제/상세/목록
//! - **`comments`**: 댓글 생성/수정/삭제
//! - **`likes`**: 좋아요 생성, 좋아요 수 조회
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환합니다.
//! `AppError`는 `ResponseError`를 구현하므로 `?`로 전파된 에러는
//! 상태 코드와 `{"error": "..."}` 본문으로 자동 변환됩니다.
//!
//! ```rust,ignore
//! #[put("/{id}")]
//! pub async fn update_post(
//!     id: web::Path<i64>,
//!     payload: web::Json<PostUpdateRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()?;                                // 400
//!     let service = PostService::instance();
//!     let id = service.update_post(*id, payload.into_inner()).await?; // 403 / 404
//!     Ok(HttpResponse::Ok().json(id))
//! }
//! ```

pub mod posts;
pub mod comments;
pub mod likes;
