//! 댓글 요청 DTO

pub mod request;

pub use request::*;
