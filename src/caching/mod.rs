//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 카운터 캐시를 제공합니다.
//!
//! # 주요 기능
//!
//! - [`counter::CounterStore`]: 정수 카운터 캐시 추상화
//! - [`counter::read_through_count`]: 캐시 미스 시 저장소에서 다시 채우는 read-through 조회
//! - [`redis::RedisClient`]: TTL 저장, 존재할 때만 증가(Lua 스크립트), 삭제
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::counter::{like_count_key, read_through_count};
//!
//! let key = like_count_key(post_id);
//! let count = read_through_count(redis.as_ref(), &key, 3600, || async {
//!     like_repo.count_by_post_id(post_id).await
//! }).await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! LIKE_COUNT_TTL_SECONDS=3600       # 카운터 키 TTL
//! ```

pub mod counter;
pub mod redis;
