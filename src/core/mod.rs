//! # Core Framework Module
//!
//! 게시판 백엔드의 컴포넌트 연결을 담당하는 핵심 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 싱글톤 레지스트리
//! - **ServiceLocator**: `Database`, `RedisClient` 등 인프라 컴포넌트 보관과
//!   `#[repository]`/`#[service]` 컴포넌트의 이름 기반 해석
//! - **자동 레지스트리**: `inventory` 기반 리포지토리/서비스 등록 정보 수집
//!
//! ## 애플리케이션 초기화
//!
//! ```rust,ignore
//! use board_service_backend::core::registry::ServiceLocator;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     // 1. 인프라 컴포넌트 등록
//!     ServiceLocator::set(database);
//!     ServiceLocator::set(redis_client);
//!
//!     // 2. 리포지토리 → 서비스 순서로 싱글톤 생성 후 인덱스 생성
//!     ServiceLocator::initialize_all();
//!     repositories::create_indexes().await?;
//!
//!     // 3. 웹 서버 시작
//!     HttpServer::new(|| App::new().configure(configure_all_routes))
//!         .bind("0.0.0.0:8080")?
//!         .run()
//!         .await
//! }
//! ```
//!
//! ## 트러블슈팅
//!
//! ### 미등록 컴포넌트
//! ```text
//! panic: Component not registered: RedisClient. Register it with ServiceLocator::set() before use
//! ```
//! **해결**: `main`에서 `initialize_all()` 호출 전에 `ServiceLocator::set()`으로 등록

pub mod registry;

pub use crate::errors::{AppError, AppResult};
pub use registry::*;
