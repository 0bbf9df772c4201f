//! 도메인 엔티티
//!
//! MongoDB에 저장되는 게시판 엔티티들입니다. 모든 식별자는 `sequences` 컬렉션에서
//! 발급한 양의 `i64` 값이며, 각 엔티티는 작성자/시각 감사 필드를 가집니다.

pub mod post;
pub mod comment;
pub mod tag;
pub mod like;
pub mod sequence;

pub use post::Post;
pub use comment::Comment;
pub use tag::{Tag, tags_changed};
pub use like::Like;
pub use sequence::Sequence;

use mongodb::bson::DateTime;

/// BSON 시각을 응답용 `chrono` UTC 시각으로 변환합니다.
pub fn to_utc(value: DateTime) -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_utc_keeps_millis() {
        let value = DateTime::from_millis(1_700_000_000_123);
        assert_eq!(to_utc(value).timestamp_millis(), 1_700_000_000_123);
    }
}
