//! # Like HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/posts/{postId}/likes?createdBy=` | 좋아요 (비동기 처리) | 202 Accepted |
//! | `GET` | `/posts/{postId}/likes` | 좋아요 수 | 200 OK |

use actix_web::{get, post, web, HttpResponse};
use crate::domain::dto::likes::{CreateLikeQuery, LikeCountResponse};
use crate::errors::AppError;
use crate::services::likes::LikeService;

/// 좋아요 이벤트를 발행하고 바로 202를 반환합니다.
///
/// 저장과 카운터 증가는 이벤트 리스너가 처리하므로 직후 조회에는 반영되지 않을 수 있습니다.
#[post("/{post_id}/likes")]
pub async fn create_like(
    post_id: web::Path<i64>,
    query: web::Query<CreateLikeQuery>,
) -> Result<HttpResponse, AppError> {
    let service = LikeService::instance();
    service.create_like(post_id.into_inner(), &query.created_by).await?;

    Ok(HttpResponse::Accepted().finish())
}

#[get("/{post_id}/likes")]
pub async fn get_like_count(
    post_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let post_id = post_id.into_inner();

    let service = LikeService::instance();
    let like_count = service.count_like_of_post(post_id).await?;

    Ok(HttpResponse::Ok().json(LikeCountResponse { post_id, like_count }))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use crate::routes::configure_all_routes;

    #[actix_web::test]
    async fn test_create_like_requires_created_by() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post().uri("/api/v1/posts/1/likes").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
