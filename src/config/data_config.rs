//! 데이터 및 서버 설정 관리 모듈
//!
//! 서버 바인딩, 요청 제한, 페이지네이션 및 캐시 관련 설정을 관리합니다.

use std::env;
use std::str::FromStr;
use log::warn;

/// 환경 변수를 읽어 파싱합니다. 없거나 파싱에 실패하면 기본값을 사용합니다.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|_| {
            warn!("{} 파싱 실패: '{}'. 기본값 사용", key, raw);
            default
        }),
        Err(_) => default,
    }
}

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우
    /// `PROFILE`(dev/prod)을 참고하고, 둘 다 없으면 `Development`를 사용합니다.
    pub fn current() -> Self {
        let raw = env::var("ENVIRONMENT")
            .or_else(|_| env::var("PROFILE"))
            .unwrap_or_else(|_| "development".to_string());

        Self::parse(&raw)
    }

    /// 문자열에서 Environment를 생성합니다. 대소문자는 구분하지 않습니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트. 기본값: 8080 (`PORT`)
    pub fn port() -> u16 {
        env_or("PORT", 8080)
    }

    /// 서버가 바인딩할 호스트 주소. 기본값: "127.0.0.1" (`HOST`)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// actix 워커 스레드 수. 기본값: 4 (`WORKERS`), 최소 1
    pub fn workers() -> usize {
        env_or("WORKERS", 4usize).max(1)
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정
///
/// `actix-governor`의 `GovernorConfigBuilder`에 전달됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경 변수에서 Rate Limiting 설정을 로드합니다.
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// 0은 governor 설정을 실패시키므로 최소 1로 보정합니다.
    pub fn from_env() -> Self {
        Self {
            per_second: env_or("RATE_LIMIT_PER_SECOND", 100u64).max(1),
            burst_size: env_or("RATE_LIMIT_BURST_SIZE", 200u32).max(1),
        }
    }
}

/// 페이지네이션 설정
pub struct PaginationConfig;

impl PaginationConfig {
    /// `size` 파라미터가 없을 때 사용할 페이지 크기 (`DEFAULT_PAGE_SIZE`, 기본값 20)
    pub fn default_page_size() -> u64 {
        env_or("DEFAULT_PAGE_SIZE", 20u64).clamp(1, Self::max_page_size())
    }

    /// 허용되는 최대 페이지 크기 (`MAX_PAGE_SIZE`, 기본값 100)
    pub fn max_page_size() -> u64 {
        env_or("MAX_PAGE_SIZE", 100u64).max(1)
    }
}

/// 캐시 설정
pub struct CacheConfig;

impl CacheConfig {
    /// 좋아요 수 캐시 키의 TTL(초). `LIKE_COUNT_TTL_SECONDS`, 기본값 3600
    pub fn like_count_ttl_seconds() -> u64 {
        env_or("LIKE_COUNT_TTL_SECONDS", 3600u64).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse("DEV"), Environment::Development);
        assert_eq!(Environment::parse("test"), Environment::Test);
        assert_eq!(Environment::parse("stage"), Environment::Staging);
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse("unknown"), Environment::Production);
        assert_eq!(Environment::parse(" PROD "), Environment::Production);
    }

    #[test]
    fn test_env_or_falls_back_on_missing_key() {
        assert_eq!(env_or("BOARD_TEST_SURELY_MISSING_KEY", 42u64), 42);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }

        if env::var("WORKERS").is_err() {
            assert_eq!(ServerConfig::workers(), 4);
        }
    }

    #[test]
    fn test_pagination_and_cache_defaults() {
        if env::var("DEFAULT_PAGE_SIZE").is_err() && env::var("MAX_PAGE_SIZE").is_err() {
            assert_eq!(PaginationConfig::default_page_size(), 20);
            assert_eq!(PaginationConfig::max_page_size(), 100);
        }

        if env::var("LIKE_COUNT_TTL_SECONDS").is_err() {
            assert_eq!(CacheConfig::like_count_ttl_seconds(), 3600);
        }
    }

    #[test]
    fn test_rate_limit_defaults() {
        if env::var("RATE_LIMIT_PER_SECOND").is_err() && env::var("RATE_LIMIT_BURST_SIZE").is_err() {
            assert_eq!(
                RateLimitConfig::from_env(),
                RateLimitConfig { per_second: 100, burst_size: 200 }
            );
        }
    }
}
