//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로로 선언된 싱글톤 서비스들을 제공합니다.
//!
//! # Features
//!
//! - 게시글 생성/수정/삭제/상세/목록 검색 (태그 포함)
//! - 댓글 생성/수정/삭제
//! - 좋아요 이벤트 발행과 read-through 좋아요 수 조회
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{posts::PostService, likes::LikeService};
//!
//! let post_service = PostService::instance();
//! let detail = post_service.get_post(1).await?;
//!
//! LikeService::instance().create_like(1, "harris").await?;
//! ```

pub mod posts;
pub mod comments;
pub mod likes;
