//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! # MongoDB 연결 URI
//! export MONGODB_URI="mongodb://localhost:27017"
//!
//! # 사용할 데이터베이스 이름
//! export DATABASE_NAME="fc_board_dev"
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//! use crate::core::registry::ServiceLocator;
//!
//! let database = Database::new().await?;
//! ServiceLocator::set(Arc::new(database));
//! ServiceLocator::initialize_all();
//! ```

use mongodb::{Client, options::ClientOptions};
use std::env;
use log::info;

/// 애플리케이션 이름 (MongoDB 서버 로그/모니터링에 표시)
const APP_NAME: &str = "fc_board";

/// MongoDB 데이터베이스 연결 래퍼
///
/// `#[repository]` 매크로가 생성하는 `collection::<T>()`가
/// [`Database::get_database`]를 통해 컬렉션에 접근합니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 환경 변수에서 연결 정보를 읽어와 클라이언트를 초기화하고
    /// `ping` 명령으로 연결 상태를 검증합니다.
    ///
    /// ## 환경 변수
    /// - `MONGODB_URI`: MongoDB 연결 URI (기본값: "mongodb://localhost:27017")
    /// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: "fc_board_dev")
    pub async fn new() -> Result<Self, mongodb::error::Error> {
        let mongodb_uri = env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let database_name = env::var("DATABASE_NAME")
            .unwrap_or_else(|_| "fc_board_dev".to_string());

        Self::connect(&mongodb_uri, &database_name).await
    }

    /// 주어진 URI와 데이터베이스 이름으로 연결합니다.
    ///
    /// 통합 테스트에서 별도의 데이터베이스를 사용할 때 쓰입니다.
    pub async fn connect(mongodb_uri: &str, database_name: &str) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(mongodb_uri).await?;
        client_options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
