//! # Comment HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/posts/{postId}/comments` | 댓글 작성 | 201 Created |
//! | `PUT` | `/comments/{commentId}` | 댓글 수정 | 200 OK |
//! | `DELETE` | `/comments/{commentId}?deletedBy=` | 댓글 삭제 | 200 OK |

use actix_web::{delete, post, put, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::comments::{CommentCreateRequest, CommentUpdateRequest, DeleteCommentQuery};
use crate::errors::AppError;
use crate::services::comments::CommentService;

#[post("/{post_id}/comments")]
pub async fn create_comment(
    post_id: web::Path<i64>,
    payload: web::Json<CommentCreateRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = CommentService::instance();
    let id = service.create_comment(post_id.into_inner(), payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(id))
}

#[put("/{comment_id}")]
pub async fn update_comment(
    comment_id: web::Path<i64>,
    payload: web::Json<CommentUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = CommentService::instance();
    let id = service.update_comment(comment_id.into_inner(), payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(id))
}

#[delete("/{comment_id}")]
pub async fn delete_comment(
    comment_id: web::Path<i64>,
    query: web::Query<DeleteCommentQuery>,
) -> Result<HttpResponse, AppError> {
    let service = CommentService::instance();
    let id = service.delete_comment(comment_id.into_inner(), &query.deleted_by).await?;

    Ok(HttpResponse::Ok().json(id))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::json;
    use crate::routes::configure_all_routes;

    #[actix_web::test]
    async fn test_create_comment_rejects_blank_content() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/posts/1/comments")
            .set_json(json!({ "content": "  ", "createdBy": "harris" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_update_comment_rejects_long_author() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::put()
            .uri("/api/v1/comments/1")
            .set_json(json!({ "content": "update comment", "updatedBy": "h".repeat(51) }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_delete_comment_requires_deleted_by() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::delete().uri("/api/v1/comments/1").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
