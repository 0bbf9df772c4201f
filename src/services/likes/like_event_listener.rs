//! # 좋아요 이벤트 채널
//!
//! 좋아요 생성 요청은 이벤트만 발행하고 바로 응답합니다.
//! 실제 저장과 카운터 증가는 백그라운드 리스너가 처리합니다.
//!
//! ```text
//! POST /posts/{id}/likes
//!   └─ LikeService::create_like ── publish ──▶ [unbounded mpsc] ──▶ listen_like_events
//!                                                                 ├─ 게시글이 없으면 경고 후 버림
//!                                                                 ├─ LikeRepository::save
//!                                                                 └─ CounterStore::increment_if_exists
//! ```

use std::future::Future;
use log::{error, info};
use tokio::sync::mpsc;
use crate::domain::events::LikeEvent;
use crate::errors::{AppError, AppResult};
use crate::services::likes::LikeService;

pub type LikeEventReceiver = mpsc::UnboundedReceiver<LikeEvent>;

/// 좋아요 이벤트 발행자
///
/// `main`에서 채널과 함께 생성되어 `ServiceLocator`에 등록됩니다.
pub struct LikeEventPublisher {
    sender: mpsc::UnboundedSender<LikeEvent>,
}

impl LikeEventPublisher {
    /// 발행자와 리스너가 소비할 수신자를 만듭니다.
    pub fn channel() -> (Self, LikeEventReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// 이벤트를 발행합니다. 리스너가 종료된 경우에만 실패합니다.
    pub fn publish(&self, event: LikeEvent) -> AppResult<()> {
        self.sender
            .send(event)
            .map_err(|e| AppError::InternalError(format!("좋아요 이벤트 발행 실패: post {}", e.0.post_id)))
    }
}

/// 채널이 닫힐 때까지 이벤트를 하나씩 처리합니다.
///
/// 처리 실패는 로그만 남기고 다음 이벤트로 넘어갑니다.
pub async fn run_listener<F, Fut>(mut receiver: LikeEventReceiver, mut handler: F)
where
    F: FnMut(LikeEvent) -> Fut,
    Fut: Future<Output = AppResult<()>>,
{
    while let Some(event) = receiver.recv().await {
        let event_id = event.event_id;
        let post_id = event.post_id;

        if let Err(e) = handler(event).await {
            error!("좋아요 이벤트 처리 실패 (event {}, post {}): {}", event_id, post_id, e);
        }
    }

    info!("좋아요 이벤트 채널이 닫혀 리스너를 종료합니다");
}

/// `LikeService`로 좋아요 이벤트를 처리하는 리스너
///
/// ```rust,ignore
/// let (publisher, receiver) = LikeEventPublisher::channel();
/// ServiceLocator::set(Arc::new(publisher));
/// actix_web::rt::spawn(listen_like_events(receiver));
/// ```
pub async fn listen_like_events(receiver: LikeEventReceiver) {
    info!("👂 좋아요 이벤트 리스너 시작");

    let like_service = LikeService::instance();
    run_listener(receiver, |event| {
        let like_service = like_service.clone();
        async move { like_service.handle_like_event(event).await }
    })
    .await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[actix_web::test]
    async fn test_published_events_reach_listener_in_order() {
        let (publisher, receiver) = LikeEventPublisher::channel();
        let handled = Arc::new(Mutex::new(Vec::new()));

        publisher.publish(LikeEvent::new(1, "harris".to_string())).unwrap();
        publisher.publish(LikeEvent::new(2, "harris2".to_string())).unwrap();
        drop(publisher);

        let sink = handled.clone();
        run_listener(receiver, move |event| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push((event.post_id, event.created_by));
                Ok(())
            }
        })
        .await;

        let handled = handled.lock().unwrap();
        assert_eq!(
            *handled,
            vec![(1, "harris".to_string()), (2, "harris2".to_string())]
        );
    }

    #[actix_web::test]
    async fn test_listener_continues_after_handler_error() {
        let (publisher, receiver) = LikeEventPublisher::channel();
        let calls = Arc::new(Mutex::new(0));

        publisher.publish(LikeEvent::new(1, "harris".to_string())).unwrap();
        publisher.publish(LikeEvent::new(2, "harris".to_string())).unwrap();
        drop(publisher);

        let counter = calls.clone();
        run_listener(receiver, move |event| {
            let counter = counter.clone();
            async move {
                *counter.lock().unwrap() += 1;
                if event.post_id == 1 {
                    Err(AppError::DatabaseError("down".to_string()))
                } else {
                    Ok(())
                }
            }
        })
        .await;

        assert_eq!(*calls.lock().unwrap(), 2);
    }

    #[test]
    fn test_publish_fails_when_listener_is_gone() {
        let (publisher, receiver) = LikeEventPublisher::channel();
        drop(receiver);

        let result = publisher.publish(LikeEvent::new(1, "harris".to_string()));
        assert!(matches!(result, Err(AppError::InternalError(_))));
    }
}
