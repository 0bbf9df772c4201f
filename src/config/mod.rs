//! # Configuration Module
//!
//! 게시판 백엔드의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 타입이 있는 접근자로 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 환경, 서버, Rate Limiting, 페이지네이션, 캐시 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, CacheConfig};
//!
//! let env = Environment::current();
//! let bind_address = ServerConfig::bind_address();
//! let ttl = CacheConfig::like_count_ttl_seconds();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="fc_board_dev"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # 페이지네이션 / 캐시
//! export DEFAULT_PAGE_SIZE="20"
//! export MAX_PAGE_SIZE="100"
//! export LIKE_COUNT_TTL_SECONDS="3600"
//! ```

pub mod data_config;

pub use data_config::*;
