pub mod like_event_listener;
pub mod like_service;

pub use like_event_listener::{listen_like_events, run_listener, LikeEventPublisher, LikeEventReceiver};
pub use like_service::LikeService;
