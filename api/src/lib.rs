//! Scoreboard API Library
//!
//! # Overview
//!
//! 게임 결과(defender/attacker 점수, 시간, nickname, 예상 레벨)를 받아
//! 승자를 계산하고 SQLite에 저장, 최근 20건을 조회하는 백엔드 API.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                         API                              │
//! │                                                          │
//! │  ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌─────────┐    │
//! │  │ Routes  │  │Services │  │   DB    │  │  Types  │    │
//! │  └────┬────┘  └────┬────┘  └────┬────┘  └────┬────┘    │
//! │       │            │            │            │          │
//! │       └────────────┴────────────┴────────────┘          │
//! │                         │                                │
//! └─────────────────────────┼────────────────────────────────┘
//!                           │
//!                           ▼
//!                  ┌────────────────┐
//!                  │ SQLite (file)  │
//!                  └────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: 환경 설정 관리
//! - `error`: 에러 타입 및 처리
//! - `routes`: HTTP 엔드포인트 핸들러
//! - `services`: 비즈니스 로직 (payload 변환, 결과 기록)
//! - `db`: 데이터베이스 연동
//! - `types`: 공통 타입 정의 (승자 판정)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use scoreboard_api::{config::Config, db::Database, routes, AppState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let db = Database::open(&config.data_dir, config.max_connections).await?;
//!     db.init_schema().await?;
//!
//!     let app = routes::create_router(AppState::new(std::sync::Arc::new(db)));
//!     // ... 서버 시작
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod services;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use db::Database;
pub use error::ApiError;
pub use services::ResultService;

/// 애플리케이션 전역 상태
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub results: Arc<ResultService>,
}

impl AppState {
    /// 같은 DB를 결과 서비스의 저장소로 주입
    pub fn new(db: Arc<Database>) -> Self {
        let results = ResultService::new(db.clone());
        Self {
            db,
            results: Arc::new(results),
        }
    }
}
