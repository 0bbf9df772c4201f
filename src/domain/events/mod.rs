//! 프로세스 내부 도메인 이벤트

pub mod like_event;

pub use like_event::LikeEvent;
