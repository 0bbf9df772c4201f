use mongodb::bson::DateTime;
use uuid::Uuid;

/// 좋아요 생성 이벤트
///
/// `LikeService::create_like`가 발행하고 좋아요 이벤트 리스너가 소비합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct LikeEvent {
    pub event_id: Uuid,
    pub post_id: i64,
    pub created_by: String,
    pub occurred_at: DateTime,
}

impl LikeEvent {
    pub fn new(post_id: i64, created_by: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            post_id,
            created_by,
            occurred_at: DateTime::now(),
        }
    }
}
