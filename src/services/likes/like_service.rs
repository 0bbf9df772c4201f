//! # 좋아요 서비스 구현
//!
//! 좋아요 생성은 이벤트 발행으로 끝나고, 좋아요 수는 Redis 카운터를
//! read-through 방식으로 조회합니다.
//!
//! ## 카운터 일관성
//!
//! - 조회 시 키가 없으면 `likes` 컬렉션에서 집계하여 TTL과 함께 기록
//! - 이벤트 처리 시 키가 **있을 때만** 증가 (게시글이 이미 삭제되었으면 이벤트를 버림)
//! - 게시글 삭제 시 키 삭제
//!
//! 증가와 재집계가 겹쳐 생기는 오차는 TTL 만료 후 재집계로 사라집니다.

use std::future::Future;
use std::sync::Arc;
use log::{debug, warn};
use singleton_macro::service;
use crate::caching::counter::{like_count_key, read_through_count, CounterStore};
use crate::caching::redis::RedisClient;
use crate::config::CacheConfig;
use crate::domain::entities::Like;
use crate::domain::events::LikeEvent;
use crate::errors::{AppResult, PostError};
use crate::repositories::likes::LikeRepository;
use crate::repositories::likes::like_repo::LIKES_COLLECTION;
use crate::repositories::posts::PostRepository;
use crate::repositories::sequences::SequenceRepository;
use crate::services::likes::LikeEventPublisher;
use crate::utils::string_utils::validate_required_string;

#[service(name = "like")]
pub struct LikeService {
    post_repo: Arc<PostRepository>,
    like_repo: Arc<LikeRepository>,
    sequence_repo: Arc<SequenceRepository>,
    counter: Arc<RedisClient>,
    publisher: Arc<LikeEventPublisher>,
}

impl LikeService {
    /// 좋아요 이벤트를 발행합니다.
    ///
    /// 게시글이 없으면 `PostError::NotFound`. 저장은 리스너가 비동기로 수행합니다.
    pub async fn create_like(&self, post_id: i64, created_by: &str) -> AppResult<()> {
        let created_by = validate_required_string(created_by, "createdBy")?;

        if self.post_repo.find_by_id(post_id).await?.is_none() {
            return Err(PostError::NotFound.into());
        }

        self.publisher.publish(LikeEvent::new(post_id, created_by))
    }

    /// 게시글의 좋아요 수를 조회합니다 (read-through).
    pub async fn count_like(&self, post_id: i64) -> AppResult<i64> {
        let key = like_count_key(post_id);
        let like_repo = &self.like_repo;

        read_through_count(
            self.counter.as_ref(),
            &key,
            CacheConfig::like_count_ttl_seconds(),
            move || like_repo.count_by_post_id(post_id),
        )
        .await
    }

    /// 존재하는 게시글의 좋아요 수를 조회합니다. 게시글이 없으면 `PostError::NotFound`.
    pub async fn count_like_of_post(&self, post_id: i64) -> AppResult<i64> {
        if self.post_repo.find_by_id(post_id).await?.is_none() {
            return Err(PostError::NotFound.into());
        }

        self.count_like(post_id).await
    }

    /// 좋아요 이벤트를 처리합니다: `Like` 저장 후 캐시된 카운터가 있으면 증가.
    ///
    /// 이벤트가 대기하는 동안 게시글이 삭제되었으면 저장하지 않고 버립니다.
    pub async fn handle_like_event(&self, event: LikeEvent) -> AppResult<()> {
        let post_exists = self.post_repo.find_by_id(event.post_id).await?.is_some();

        apply_like_event(self.counter.as_ref(), event, post_exists, move |event| async move {
            let id = self.sequence_repo.next_id(LIKES_COLLECTION).await?;
            let like = Like::new(id, event.post_id, event.created_by, event.occurred_at);
            self.like_repo.save(&like).await
        })
        .await?;

        Ok(())
    }

    /// 게시글의 좋아요 카운터 캐시를 제거합니다. 실패는 로그만 남깁니다.
    pub async fn evict_like_count(&self, post_id: i64) {
        evict_count(self.counter.as_ref(), post_id).await;
    }
}

/// 좋아요 이벤트 하나를 반영합니다. 저장했으면 `true`.
///
/// 게시글이 없으면 경고만 남기고 `save`를 호출하지 않습니다.
/// 저장 후 카운터 증가 실패는 다음 재집계에서 복구되므로 에러로 올리지 않습니다.
async fn apply_like_event<S, F, Fut>(
    counter: &S,
    event: LikeEvent,
    post_exists: bool,
    save: F,
) -> AppResult<bool>
where
    S: CounterStore + ?Sized,
    F: FnOnce(LikeEvent) -> Fut,
    Fut: Future<Output = AppResult<()>>,
{
    if !post_exists {
        warn!(
            "삭제된 게시글의 좋아요 이벤트를 버립니다: postId={}, createdBy={}, eventId={}",
            event.post_id, event.created_by, event.event_id
        );
        return Ok(false);
    }

    let key = like_count_key(event.post_id);
    save(event).await?;

    match counter.increment_if_exists(&key).await {
        Ok(Some(count)) => debug!("좋아요 카운터 증가: {} = {}", key, count),
        Ok(None) => debug!("좋아요 카운터 미캐시: {}", key),
        Err(e) => warn!("좋아요 카운터 증가 실패 ({}): {}", key, e),
    }

    Ok(true)
}

async fn evict_count<S: CounterStore + ?Sized>(counter: &S, post_id: i64) {
    let key = like_count_key(post_id);
    if let Err(e) = counter.evict(&key).await {
        warn!("좋아요 카운터 삭제 실패 ({}): {}", key, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use crate::caching::counter::tests::MemoryCounterStore;
    use crate::errors::AppError;

    fn event(post_id: i64) -> LikeEvent {
        LikeEvent::new(post_id, "harris".to_string())
    }

    #[actix_web::test]
    async fn test_event_for_deleted_post_is_dropped() {
        let store = MemoryCounterStore::default();
        store.set_count("like:1", 4, 3600).await.unwrap();
        let saved = Mutex::new(Vec::new());
        let saved_events = &saved;

        let applied = apply_like_event(&store, event(1), false, move |event| async move {
            saved_events.lock().unwrap().push(event);
            Ok(())
        })
        .await
        .unwrap();

        assert!(!applied);
        assert!(saved.lock().unwrap().is_empty());
        assert_eq!(store.get_count("like:1").await.unwrap(), Some(4));
    }

    #[actix_web::test]
    async fn test_event_increments_cached_counter() {
        let store = MemoryCounterStore::default();
        store.set_count("like:1", 4, 3600).await.unwrap();
        let saved = Mutex::new(Vec::new());
        let saved_events = &saved;

        let applied = apply_like_event(&store, event(1), true, move |event| async move {
            saved_events.lock().unwrap().push(event);
            Ok(())
        })
        .await
        .unwrap();

        assert!(applied);
        let saved = saved.into_inner().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].post_id, 1);
        assert_eq!(saved[0].created_by, "harris");
        assert_eq!(store.get_count("like:1").await.unwrap(), Some(5));
    }

    #[actix_web::test]
    async fn test_event_does_not_create_missing_counter() {
        let store = MemoryCounterStore::default();

        let applied = apply_like_event(&store, event(2), true, |_| async { Ok(()) })
            .await
            .unwrap();

        assert!(applied);
        assert_eq!(store.get_count("like:2").await.unwrap(), None);
    }

    #[actix_web::test]
    async fn test_counter_failure_does_not_fail_saved_event() {
        let store = MemoryCounterStore::failing();

        let applied = apply_like_event(&store, event(1), true, |_| async { Ok(()) })
            .await
            .unwrap();

        assert!(applied);
    }

    #[actix_web::test]
    async fn test_save_failure_skips_counter() {
        let store = MemoryCounterStore::default();
        store.set_count("like:1", 4, 3600).await.unwrap();

        let result = apply_like_event(&store, event(1), true, |_| async {
            Err(AppError::DatabaseError("down".to_string()))
        })
        .await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
        assert_eq!(store.get_count("like:1").await.unwrap(), Some(4));
    }

    #[actix_web::test]
    async fn test_evict_count() {
        let store = MemoryCounterStore::default();
        store.set_count("like:3", 1, 3600).await.unwrap();

        evict_count(&store, 3).await;
        assert_eq!(store.get_count("like:3").await.unwrap(), None);

        evict_count(&MemoryCounterStore::failing(), 3).await;
    }
}
