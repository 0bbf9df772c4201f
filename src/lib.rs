//! 게시판 서비스 백엔드
//!
//! 게시글, 댓글, 태그, 좋아요를 REST API로 제공하는 Actix-web 기반 서비스입니다.
//! 매크로 기반 싱글톤 DI로 리포지토리/서비스를 관리합니다.
//!
//! # Features
//!
//! - **게시글**: 생성, 수정(작성자만), 삭제(작성자만, 연관 데이터 함께 삭제), 상세, 검색/페이지
//! - **태그**: 게시글별 순서 있는 태그, 태그 기준 목록 조회
//! - **댓글**: 생성, 수정/삭제(작성자만)
//! - **좋아요**: 이벤트 기반 비동기 저장, Redis read-through 카운터
//! - **MongoDB**: 엔티티 저장 (시퀀스 기반 `i64` ID)
//! - **Redis**: 좋아요 수 캐시
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/v1 REST API
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증/응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────────┐
//! │    Services     │ ──▶ │ LikeEvent (mpsc)     │
//! └─────────────────┘     │  └─ 이벤트 리스너      │
//!          │              └──────────────────────┘
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소 + 카운터 캐시
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use board_service_backend::services::posts::PostService;
//!
//! let post_service = PostService::instance();
//! let detail = post_service.get_post(1).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
