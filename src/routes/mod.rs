//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 모든 API는 `/api/v1` 스코프 아래에 있으며, 헬스체크만 루트에 있습니다.
//!
//! # Routes
//!
//! ```text
//! GET    /health
//!
//! /api/v1/posts
//!   POST   ""                        게시글 생성
//!   GET    ""                        게시글 목록
//!   GET    /{id}                     게시글 상세
//!   PUT    /{id}                     게시글 수정
//!   DELETE /{id}?createdBy=          게시글 삭제
//!   POST   /{postId}/comments        댓글 작성
//!   POST   /{postId}/likes?createdBy= 좋아요
//!   GET    /{postId}/likes           좋아요 수
//!
//! /api/v1/comments
//!   PUT    /{commentId}              댓글 수정
//!   DELETE /{commentId}?deletedBy=   댓글 삭제
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::errors::AppError;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// JSON 본문과 쿼리 파라미터 파싱 실패도 `AppError::ValidationError`로 변환하여
/// 다른 에러와 같은 `{"error": "..."}` 형태로 응답합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());
    cfg.app_data(query_config());

    // Health check endpoint
    cfg.service(health_check);

    cfg.service(
        web::scope("/api/v1")
            .configure(configure_post_routes)
            .configure(configure_comment_routes)
    );
}

/// 게시글 및 게시글 하위 리소스(댓글 작성, 좋아요) 라우트
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/posts \
///   -H "Content-Type: application/json" \
///   -d '{"title":"title","content":"content","createdBy":"harris","tags":["tag1"]}'
///
/// curl "http://localhost:8080/api/v1/posts?tag=tag1&page=0&size=5"
/// ```
fn configure_post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts")
            .service(handlers::posts::create_post)
            .service(handlers::posts::get_posts)
            .service(handlers::posts::get_post)
            .service(handlers::posts::update_post)
            .service(handlers::posts::delete_post)
            .service(handlers::comments::create_comment)
            .service(handlers::likes::create_like)
            .service(handlers::likes::get_like_count)
    );
}

/// 댓글 수정/삭제 라우트
fn configure_comment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/comments")
            .service(handlers::comments::update_comment)
            .service(handlers::comments::delete_comment)
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "fc_board_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "cache": "Redis",
///     "events": "In-process like events"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "fc_board_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "events": "In-process like events"
        }
    }))
}
