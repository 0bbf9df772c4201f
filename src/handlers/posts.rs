//! # Post HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/posts` | 게시글 생성 | 201 Created |
//! | `PUT` | `/posts/{id}` | 게시글 수정 | 200 OK |
//! | `DELETE` | `/posts/{id}?createdBy=` | 게시글 삭제 | 200 OK |
//! | `GET` | `/posts/{id}` | 게시글 상세 | 200 OK |
//! | `GET` | `/posts?page=&size=&title=&createdBy=&tag=` | 게시글 목록 | 200 OK |
//!
//! 생성/수정/삭제는 게시글 ID를 JSON 숫자로 반환합니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::PageRequest;
use crate::domain::dto::posts::{DeletePostQuery, PostCreateRequest, PostSearchRequest, PostUpdateRequest};
use crate::errors::AppError;
use crate::services::posts::PostService;

/// 게시글 생성
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/posts \
///   -H "Content-Type: application/json" \
///   -d '{"title":"title","content":"content","createdBy":"harris","tags":["tag1","tag2"]}'
/// ```
#[post("")]
pub async fn create_post(
    payload: web::Json<PostCreateRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = PostService::instance();
    let id = service.create_post(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(id))
}

/// 게시글 수정
///
/// 작성자(`updatedBy == createdBy`)만 수정할 수 있습니다. `tags`가 기존 목록과 다르면 교체됩니다.
#[put("/{id}")]
pub async fn update_post(
    id: web::Path<i64>,
    payload: web::Json<PostUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = PostService::instance();
    let id = service.update_post(id.into_inner(), payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(id))
}

/// 게시글 삭제
///
/// ```bash
/// curl -X DELETE "http://localhost:8080/api/v1/posts/1?createdBy=harris"
/// ```
#[delete("/{id}")]
pub async fn delete_post(
    id: web::Path<i64>,
    query: web::Query<DeletePostQuery>,
) -> Result<HttpResponse, AppError> {
    let service = PostService::instance();
    let id = service.delete_post(id.into_inner(), &query.created_by).await?;

    Ok(HttpResponse::Ok().json(id))
}

/// 게시글 상세 (댓글, 태그, 좋아요 수 포함)
#[get("/{id}")]
pub async fn get_post(
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let service = PostService::instance();
    let detail = service.get_post(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(detail))
}

/// 게시글 목록
///
/// ```bash
/// curl "http://localhost:8080/api/v1/posts?page=0&size=5&title=title&createdBy=harris"
/// curl "http://localhost:8080/api/v1/posts?tag=tag1"
/// ```
#[get("")]
pub async fn get_posts(
    page: web::Query<PageRequest>,
    search: web::Query<PostSearchRequest>,
) -> Result<HttpResponse, AppError> {
    let service = PostService::instance();
    let page = service.find_page_by(page.into_inner(), search.into_inner()).await?;

    Ok(HttpResponse::Ok().json(page))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::json;
    use crate::routes::configure_all_routes;

    #[actix_web::test]
    async fn test_create_post_rejects_invalid_body() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/posts")
            .set_json(json!({
                "title": "",
                "content": "content",
                "createdBy": "harris",
                "tags": []
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("Validation error"));
    }

    #[actix_web::test]
    async fn test_create_post_rejects_too_many_tags() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;
        let tags: Vec<String> = (0..11).map(|i| format!("tag{}", i)).collect();

        let req = test::TestRequest::post()
            .uri("/api/v1/posts")
            .set_json(json!({
                "title": "title",
                "content": "content",
                "createdBy": "harris",
                "tags": tags
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_update_post_rejects_missing_field() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::put()
            .uri("/api/v1/posts/1")
            .set_json(json!({ "title": "title", "content": "content" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_delete_post_requires_created_by() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::delete().uri("/api/v1/posts/1").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_non_numeric_post_id_is_not_found() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/api/v1/posts/abc").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_invalid_page_parameter_is_bad_request() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/api/v1/posts?page=-1").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
