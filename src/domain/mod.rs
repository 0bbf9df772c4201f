//! # Domain Layer Module
//!
//! 게시판 도메인의 엔티티, 데이터 전송 객체, 이벤트를 정의합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB에 저장되는 Post / Comment / Tag / Like / Sequence
//! ├── dto       - HTTP 요청/응답 (camelCase JSON), 페이지네이션
//! └── events    - 프로세스 내부 이벤트 (LikeEvent)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB, Redis)
//! ```
//!
//! ## 작성자 규칙
//!
//! 수정/삭제는 엔티티의 `created_by`와 요청자의 이름이 같을 때만 허용됩니다.
//! 이 규칙은 엔티티 메서드(`Post::update`, `Comment::ensure_deletable_by` 등)에 있습니다.

pub mod entities;
pub mod dto;
pub mod events;
