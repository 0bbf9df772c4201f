//! # 게시글 서비스 구현
//!
//! 게시글과 그 태그의 생명주기, 상세 조회, 목록 검색을 담당합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! create_post  ─ ID 발급 → Post 저장 → Tag 저장(요청 순서)
//! update_post  ─ 작성자 확인 → Post 교체 → 태그 목록이 다르면 전체 교체
//! delete_post  ─ 작성자 확인 → 댓글/태그/좋아요 삭제 → Post 삭제 → 카운터 캐시 제거
//! get_post     ─ Post + 댓글 + 태그 + 좋아요 수
//! find_page_by ─ tag 조건이 있으면 태그 기준 페이지, 없으면 제목/작성자 필터 페이지
//! ```
//!
//! 여러 컬렉션에 걸친 변경은 트랜잭션 없이 순서대로 수행됩니다.

use std::collections::HashMap;
use std::sync::Arc;
use log::info;
use singleton_macro::service;
use crate::config::PaginationConfig;
use crate::domain::dto::posts::{
    PostCreateRequest, PostDetailResponse, PostSearchRequest, PostSummaryResponse, PostUpdateRequest,
};
use crate::domain::dto::{Page, PageRequest};
use crate::domain::entities::{tags_changed, Post, Tag};
use crate::errors::{AppResult, PostError};
use crate::repositories::comments::CommentRepository;
use crate::repositories::likes::LikeRepository;
use crate::repositories::posts::post_repo::POSTS_COLLECTION;
use crate::repositories::posts::tag_repo::TAGS_COLLECTION;
use crate::repositories::posts::{PostRepository, TagRepository};
use crate::repositories::sequences::SequenceRepository;
use crate::services::likes::LikeService;
use crate::utils::string_utils::validate_required_string;

/// 게시글 비즈니스 로직 서비스
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let service = PostService::instance();
///
/// let id = service.create_post(PostCreateRequest {
///     title: "title".to_string(),
///     content: "content".to_string(),
///     created_by: "harris".to_string(),
///     tags: vec!["tag1".to_string(), "tag2".to_string()],
/// }).await?;
///
/// let page = service
///     .find_page_by(PageRequest::new(0, 5), PostSearchRequest { tag: Some("tag1".into()), ..Default::default() })
///     .await?;
/// ```
#[service(name = "post")]
pub struct PostService {
    post_repo: Arc<PostRepository>,
    tag_repo: Arc<TagRepository>,
    comment_repo: Arc<CommentRepository>,
    like_repo: Arc<LikeRepository>,
    sequence_repo: Arc<SequenceRepository>,
    like_service: Arc<LikeService>,
}

impl PostService {
    /// 게시글과 태그를 저장하고 게시글 ID를 반환합니다.
    ///
    /// 작성자 이름과 태그 이름은 앞뒤 공백을 제거한 뒤 저장됩니다.
    pub async fn create_post(&self, request: PostCreateRequest) -> AppResult<i64> {
        let request = request.normalized();
        let id = self.sequence_repo.next_id(POSTS_COLLECTION).await?;
        let post = Post::new(id, request.title, request.content, request.created_by);
        self.post_repo.save(&post).await?;

        self.save_tags(&post, request.tags).await?;

        info!("게시글 생성: id={}, createdBy={}", post.id, post.created_by);
        Ok(id)
    }

    /// 게시글을 수정합니다.
    ///
    /// - 없는 게시글 → `PostError::NotFound`
    /// - 작성자가 아님 → `PostError::NotUpdatable`
    pub async fn update_post(&self, id: i64, request: PostUpdateRequest) -> AppResult<i64> {
        let post = self.post_repo.find_by_id(id).await?;
        let (post, requested_tags) = apply_post_update(post, request)?;
        self.post_repo.update(&post).await?;

        let current_tags = self.tag_repo.find_all_by_post_id(id).await?;
        if let Some(tags) = plan_tag_update(&current_tags, requested_tags) {
            self.tag_repo.delete_all_by_post_id(id).await?;
            self.save_tags(&post, tags).await?;
        }

        Ok(id)
    }

    /// 게시글과 연관된 댓글/태그/좋아요를 삭제합니다.
    ///
    /// - 없는 게시글 → `PostError::NotFound`
    /// - 작성자가 아님 → `PostError::NotDeletable`
    pub async fn delete_post(&self, id: i64, deleted_by: &str) -> AppResult<i64> {
        let deleted_by = validate_required_string(deleted_by, "createdBy")?;
        let post = self.post_repo.find_by_id(id).await?;
        authorize_post_delete(post, &deleted_by)?;

        let comments = self.comment_repo.delete_all_by_post_id(id).await?;
        let tags = self.tag_repo.delete_all_by_post_id(id).await?;
        let likes = self.like_repo.delete_all_by_post_id(id).await?;
        self.post_repo.delete_by_id(id).await?;
        self.like_service.evict_like_count(id).await;

        info!(
            "게시글 삭제: id={} (comments={}, tags={}, likes={})",
            id, comments, tags, likes
        );
        Ok(id)
    }

    /// 게시글 상세를 조회합니다. 없으면 `PostError::NotFound`.
    pub async fn get_post(&self, id: i64) -> AppResult<PostDetailResponse> {
        let post = self.post_repo
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound)?;

        let comments = self.comment_repo.find_all_by_post_id(id).await?;
        let tags = self.tag_repo
            .find_all_by_post_id(id)
            .await?
            .into_iter()
            .map(|tag| tag.name)
            .collect();
        let like_count = self.like_service.count_like(id).await?;

        Ok(PostDetailResponse::new(post, comments, tags, like_count))
    }

    /// 게시글 목록을 페이지 단위로 검색합니다.
    ///
    /// `tag`가 있으면 해당 이름의 태그를 최신순으로 페이지 처리하고 각 태그의 게시글을
    /// `firstTag = tag`로 요약합니다. 없으면 제목/작성자 조건으로 게시글을 최신순 조회합니다.
    pub async fn find_page_by(
        &self,
        page_request: PageRequest,
        search: PostSearchRequest,
    ) -> AppResult<Page<PostSummaryResponse>> {
        let pageable = page_request.normalize(
            PaginationConfig::default_page_size(),
            PaginationConfig::max_page_size(),
        );

        let (mut summaries, total) = match search.tag {
            Some(tag) => {
                let (tags, total) = self.tag_repo.find_page_by_name(&tag, pageable).await?;
                let post_ids: Vec<i64> = tags.iter().map(|tag| tag.post_id).collect();
                let posts = self.post_repo.find_all_by_ids(&post_ids).await?;

                (summarize_tag_page(&tags, posts), total)
            }
            None => {
                let filter = PostRepository::search_filter(
                    search.title.as_deref(),
                    search.created_by.as_deref(),
                );
                let (posts, total) = self.post_repo.find_page(filter, pageable).await?;
                let post_ids: Vec<i64> = posts.iter().map(|post| post.id).collect();
                let first_tags = self.tag_repo.find_first_names_by_post_ids(&post_ids).await?;

                (summarize_post_page(&posts, first_tags), total)
            }
        };

        for summary in summaries.iter_mut() {
            summary.like_count = self.like_service.count_like(summary.id).await?;
        }

        Ok(Page::new(summaries, pageable, total))
    }

    async fn save_tags(&self, post: &Post, names: Vec<String>) -> AppResult<()> {
        let mut tags = Vec::with_capacity(names.len());
        for name in names {
            let tag_id = self.sequence_repo.next_id(TAGS_COLLECTION).await?;
            tags.push(Tag::new(tag_id, name, post.id, post.created_by.clone()));
        }

        self.tag_repo.save_all(&tags).await
    }
}

/// 수정 요청을 게시글에 적용하고, 요청된 태그 목록을 돌려줍니다.
///
/// 수정자 이름과 태그 이름은 공백을 제거한 뒤 작성자와 비교됩니다.
fn apply_post_update(post: Option<Post>, request: PostUpdateRequest) -> AppResult<(Post, Vec<String>)> {
    let request = request.normalized();
    let mut post = post.ok_or(PostError::NotFound)?;

    post.update(request.title, request.content, request.updated_by)?;
    Ok((post, request.tags))
}

/// 태그 목록이 내용이나 순서가 다를 때만 새로 저장할 목록을 반환합니다.
fn plan_tag_update(current: &[Tag], requested: Vec<String>) -> Option<Vec<String>> {
    tags_changed(current, &requested).then_some(requested)
}

/// 삭제 대상 게시글이 있고 요청자가 작성자인지 확인합니다.
///
/// `deleted_by`는 [`validate_required_string`]으로 정리된 이름이어야 합니다.
fn authorize_post_delete(post: Option<Post>, deleted_by: &str) -> AppResult<Post> {
    let post = post.ok_or(PostError::NotFound)?;
    post.ensure_deletable_by(deleted_by)?;
    Ok(post)
}

/// 태그 페이지를 게시글 요약으로 변환합니다.
///
/// 태그 순서를 유지하며, 게시글이 없어진 태그는 건너뜁니다.
/// 좋아요 수는 0으로 채워지며 호출자가 갱신합니다.
fn summarize_tag_page(tags: &[Tag], posts: Vec<Post>) -> Vec<PostSummaryResponse> {
    let posts: HashMap<i64, Post> = posts.into_iter().map(|post| (post.id, post)).collect();

    tags.iter()
        .filter_map(|tag| {
            posts
                .get(&tag.post_id)
                .map(|post| PostSummaryResponse::new(post, Some(tag.name.clone()), 0))
        })
        .collect()
}

/// 게시글 페이지를 요약으로 변환합니다. 좋아요 수는 호출자가 갱신합니다.
fn summarize_post_page(posts: &[Post], mut first_tags: HashMap<i64, String>) -> Vec<PostSummaryResponse> {
    posts
        .iter()
        .map(|post| PostSummaryResponse::new(post, first_tags.remove(&post.id), 0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    fn post(id: i64, created_by: &str) -> Post {
        Post::new(id, format!("title{}", id), format!("content{}", id), created_by.to_string())
    }

    fn tag(id: i64, name: &str, post_id: i64) -> Tag {
        Tag::new(id, name.to_string(), post_id, "harris".to_string())
    }

    fn update_request(updated_by: &str, tags: &[&str]) -> PostUpdateRequest {
        PostUpdateRequest {
            title: "update title".to_string(),
            content: "update content".to_string(),
            updated_by: updated_by.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }

    #[test]
    fn test_padded_author_can_delete_own_post() {
        let request = PostCreateRequest {
            title: "title".to_string(),
            content: "content".to_string(),
            created_by: "  harris  ".to_string(),
            tags: vec![" tag1 ".to_string()],
        }
        .normalized();
        let post = Post::new(1, request.title, request.content, request.created_by);

        assert_eq!(post.created_by, "harris");
        assert_eq!(request.tags, vec!["tag1"]);

        let deleted_by = validate_required_string("  harris  ", "createdBy").unwrap();
        let deleted = authorize_post_delete(Some(post), &deleted_by).unwrap();
        assert_eq!(deleted.id, 1);
    }

    #[test]
    fn test_authorize_post_delete_errors() {
        assert!(matches!(
            authorize_post_delete(None, "harris"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            authorize_post_delete(Some(post(1, "harris")), "harris2"),
            Err(AppError::AuthorizationError(_))
        ));
    }

    #[test]
    fn test_apply_post_update_trims_updater_and_tags() {
        let (post, tags) = apply_post_update(
            Some(post(1, "harris")),
            update_request(" harris ", &["tag1 ", " tag2"]),
        )
        .unwrap();

        assert_eq!(post.title, "update title");
        assert_eq!(post.updated_by.as_deref(), Some("harris"));
        assert_eq!(tags, vec!["tag1", "tag2"]);
    }

    #[test]
    fn test_apply_post_update_errors() {
        assert!(matches!(
            apply_post_update(None, update_request("harris", &[])),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            apply_post_update(Some(post(1, "harris")), update_request("update harris", &[])),
            Err(AppError::AuthorizationError(_))
        ));
    }

    #[test]
    fn test_plan_tag_update() {
        let current = vec![tag(1, "tag1", 1), tag(2, "tag2", 1)];

        assert_eq!(plan_tag_update(&current, vec!["tag1".into(), "tag2".into()]), None);
        assert_eq!(
            plan_tag_update(&current, vec!["tag2".into(), "tag1".into()]),
            Some(vec!["tag2".to_string(), "tag1".to_string()])
        );
        assert_eq!(plan_tag_update(&current, vec![]), Some(vec![]));
        assert_eq!(plan_tag_update(&[], vec![]), None);
    }

    #[test]
    fn test_summarize_tag_page_keeps_tag_order() {
        let tags = vec![tag(30, "tag5", 3), tag(20, "tag5", 2), tag(10, "tag5", 1)];
        let posts = vec![post(1, "harris"), post(2, "harris"), post(3, "harris2")];

        let summaries = summarize_tag_page(&tags, posts);

        let ids: Vec<i64> = summaries.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert!(summaries.iter().all(|s| s.first_tag.as_deref() == Some("tag5")));
        assert_eq!(summaries[0].created_by, "harris2");
    }

    #[test]
    fn test_summarize_tag_page_skips_missing_posts() {
        let tags = vec![tag(2, "tag1", 99), tag(1, "tag1", 1)];

        let summaries = summarize_tag_page(&tags, vec![post(1, "harris")]);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, 1);
    }

    #[test]
    fn test_summarize_post_page_uses_first_tag() {
        let posts = vec![post(2, "harris"), post(1, "harris")];
        let mut first_tags = HashMap::new();
        first_tags.insert(1, "tag1".to_string());

        let summaries = summarize_post_page(&posts, first_tags);

        assert_eq!(summaries[0].id, 2);
        assert_eq!(summaries[0].first_tag, None);
        assert_eq!(summaries[1].first_tag.as_deref(), Some("tag1"));
        assert!(summaries.iter().all(|s| s.like_count == 0));
    }
}
