//! 카운터 캐시 추상화와 read-through 조회
//!
//! 게시글 좋아요 수처럼 저장소에서 집계할 수 있는 정수를 캐시에 보관합니다.
//! 캐시는 항상 저장소로부터 다시 만들 수 있어야 하며, 캐시 장애는
//! 요청 실패로 이어지지 않습니다.

use std::future::Future;
use async_trait::async_trait;
use log::warn;
use crate::errors::AppResult;

/// 좋아요 수 캐시 키 (`like:{postId}`)
pub fn like_count_key(post_id: i64) -> String {
    format!("like:{}", post_id)
}

/// 정수 카운터 캐시 저장소
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// 캐시된 값을 조회합니다. 키가 없으면 `None`.
    async fn get_count(&self, key: &str) -> AppResult<Option<i64>>;

    /// 값을 TTL과 함께 저장합니다.
    async fn set_count(&self, key: &str, value: i64, ttl_seconds: u64) -> AppResult<()>;

    /// 키가 존재할 때만 1 증가시킵니다.
    ///
    /// 키가 없으면 아무것도 하지 않고 `None`을 반환합니다. 없는 키를 새로 만들면
    /// 저장소의 실제 개수 대신 1부터 시작하게 되므로 생성하지 않습니다.
    async fn increment_if_exists(&self, key: &str) -> AppResult<Option<i64>>;

    /// 키를 삭제합니다. 없는 키도 성공으로 처리합니다.
    async fn evict(&self, key: &str) -> AppResult<()>;
}

/// read-through 방식으로 카운터를 조회합니다.
///
/// 1. 캐시에 값이 있으면 그대로 반환
/// 2. 없으면 `load`로 저장소에서 집계한 뒤 TTL과 함께 캐시에 기록
/// 3. 캐시 조회/기록 실패는 경고 로그만 남기고 저장소 값을 반환
///
/// `load`의 에러는 그대로 전파됩니다.
pub async fn read_through_count<S, F, Fut>(
    store: &S,
    key: &str,
    ttl_seconds: u64,
    load: F,
) -> AppResult<i64>
where
    S: CounterStore + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = AppResult<i64>>,
{
    match store.get_count(key).await {
        Ok(Some(cached)) => return Ok(cached),
        Ok(None) => {}
        Err(e) => {
            warn!("카운터 캐시 조회 실패 ({}): {}. 저장소 값으로 대체합니다", key, e);
            return load().await;
        }
    }

    let count = load().await?;

    if let Err(e) = store.set_count(key, count, ttl_seconds).await {
        warn!("카운터 캐시 기록 실패 ({}): {}", key, e);
    }

    Ok(count)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use crate::errors::AppError;

    /// 테스트용 메모리 카운터 저장소
    #[derive(Default)]
    pub(crate) struct MemoryCounterStore {
        values: Mutex<HashMap<String, (i64, u64)>>,
        pub(crate) fail: bool,
    }

    impl MemoryCounterStore {
        pub(crate) fn failing() -> Self {
            Self { fail: true, ..Default::default() }
        }

        pub(crate) fn ttl_of(&self, key: &str) -> Option<u64> {
            self.values.lock().unwrap().get(key).map(|(_, ttl)| *ttl)
        }

        fn check(&self) -> AppResult<()> {
            if self.fail {
                Err(AppError::RedisError("connection refused".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl CounterStore for MemoryCounterStore {
        async fn get_count(&self, key: &str) -> AppResult<Option<i64>> {
            self.check()?;
            Ok(self.values.lock().unwrap().get(key).map(|(v, _)| *v))
        }

        async fn set_count(&self, key: &str, value: i64, ttl_seconds: u64) -> AppResult<()> {
            self.check()?;
            self.values.lock().unwrap().insert(key.to_string(), (value, ttl_seconds));
            Ok(())
        }

        async fn increment_if_exists(&self, key: &str) -> AppResult<Option<i64>> {
            self.check()?;
            let mut values = self.values.lock().unwrap();
            Ok(values.get_mut(key).map(|(v, _)| {
                *v += 1;
                *v
            }))
        }

        async fn evict(&self, key: &str) -> AppResult<()> {
            self.check()?;
            self.values.lock().unwrap().remove(key);
            Ok(())
        }
    }

    #[test]
    fn test_like_count_key() {
        assert_eq!(like_count_key(1), "like:1");
        assert_eq!(like_count_key(9_000_000_000), "like:9000000000");
    }

    #[actix_web::test]
    async fn test_read_through_miss_loads_and_caches() {
        let store = MemoryCounterStore::default();
        let load_calls = AtomicUsize::new(0);
        let loads = &load_calls;

        let count = read_through_count(&store, "like:1", 3600, move || async move {
            loads.fetch_add(1, Ordering::SeqCst);
            Ok(3)
        })
        .await
        .unwrap();

        assert_eq!(count, 3);
        assert_eq!(store.get_count("like:1").await.unwrap(), Some(3));
        assert_eq!(store.ttl_of("like:1"), Some(3600));

        let count = read_through_count(&store, "like:1", 3600, move || async move {
            loads.fetch_add(1, Ordering::SeqCst);
            Ok(99)
        })
        .await
        .unwrap();

        assert_eq!(count, 3);
        assert_eq!(load_calls.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn test_read_through_caches_zero() {
        let store = MemoryCounterStore::default();

        let count = read_through_count(&store, "like:7", 60, || async { Ok(0) })
            .await
            .unwrap();

        assert_eq!(count, 0);
        assert_eq!(store.get_count("like:7").await.unwrap(), Some(0));
    }

    #[actix_web::test]
    async fn test_read_through_cache_failure_falls_back_to_store() {
        let store = MemoryCounterStore::failing();

        let count = read_through_count(&store, "like:1", 3600, || async { Ok(5) })
            .await
            .unwrap();

        assert_eq!(count, 5);
    }

    #[actix_web::test]
    async fn test_read_through_propagates_load_error() {
        let store = MemoryCounterStore::default();

        let result = read_through_count(&store, "like:1", 3600, || async {
            Err(AppError::DatabaseError("down".to_string()))
        })
        .await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
        assert_eq!(store.get_count("like:1").await.unwrap(), None);
    }

    #[actix_web::test]
    async fn test_increment_if_exists_skips_missing_key() {
        let store = MemoryCounterStore::default();

        assert_eq!(store.increment_if_exists("like:1").await.unwrap(), None);
        assert_eq!(store.get_count("like:1").await.unwrap(), None);

        store.set_count("like:1", 2, 3600).await.unwrap();
        assert_eq!(store.increment_if_exists("like:1").await.unwrap(), Some(3));
    }
}
