//! 게시판 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 컴포넌트를 초기화합니다.
//! MongoDB, Redis 연결과 좋아요 이벤트 채널을 설정한 뒤 REST API를 제공합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use env_logger::Env;
use log::{error, info, warn};
use board_service_backend::caching::redis::RedisClient;
use board_service_backend::config::{Environment, RateLimitConfig, ServerConfig};
use board_service_backend::core::registry::ServiceLocator;
use board_service_backend::db::Database;
use board_service_backend::repositories;
use board_service_backend::routes::configure_all_routes;
use board_service_backend::services::likes::{listen_like_events, LikeEventPublisher};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let (profile, env_result) = load_env_file();
    init_logging();
    report_env_file(&profile, &env_result);

    info!("🚀 게시판 서비스 시작중... ({:?})", Environment::current());

    // 데이터 스토어 초기화
    let (database, redis_client) = initialize_data_stores().await?;

    // 좋아요 이벤트 채널
    let (publisher, receiver) = LikeEventPublisher::channel();

    // ServiceLocator에 인프라 컴포넌트 등록
    ServiceLocator::set(database);
    ServiceLocator::set(redis_client);
    ServiceLocator::set(Arc::new(publisher));

    // 모든 리포지토리/서비스 초기화
    ServiceLocator::initialize_all();
    repositories::create_indexes()
        .await
        .map_err(|e| to_io_error("인덱스 생성 실패", e))?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    actix_web::rt::spawn(listen_like_events(receiver));

    // HTTP 서버 시작
    start_http_server().await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server() -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다 (workers: {})", bind_address, workers);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1/posts", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(workers)
        .run()
        .await
}

/// `PROFILE`에 맞는 env 파일을 읽습니다.
///
/// `dev`(기본값)는 `.env.dev`, `prod`는 `.env.prod`, 그 외에는 `.env`를 사용합니다.
/// 로거보다 먼저 호출되므로 결과는 반환만 하고 기록은 [`report_env_file`]에서 합니다.
fn load_env_file() -> (String, Result<(), String>) {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let file_name = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    };

    let result = dotenv::from_filename(file_name)
        .map(|_| ())
        .map_err(|e| format!("{} 로드 실패: {}", file_name, e));

    (profile, result)
}

fn report_env_file(profile: &str, result: &Result<(), String>) {
    match result {
        Ok(()) => info!("profile '{}' env 파일 로드 완료", profile),
        Err(e) => warn!("profile '{}': {} (환경 변수만 사용)", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=board_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB와 Redis 연결을 초기화합니다
async fn initialize_data_stores() -> std::io::Result<(Arc<Database>, Arc<RedisClient>)> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new()
        .await
        .map_err(|e| to_io_error("데이터베이스 연결 실패", e))?;

    let redis_client = RedisClient::new()
        .await
        .map_err(|e| to_io_error("Redis 연결 실패", e))?;

    Ok((Arc::new(database), Arc::new(redis_client)))
}

fn to_io_error(context: &str, e: impl std::fmt::Display) -> std::io::Error {
    error!("❌ {}: {}", context, e);
    std::io::Error::other(format!("{}: {}", context, e))
}

/// 게시판 프론트엔드 개발 서버와 자체 서버 origin
const ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:8080",
    "http://127.0.0.1:8080",
];

fn configure_cors() -> Cors {
    ALLOWED_ORIGINS
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
