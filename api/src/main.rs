//! Scoreboard API Server
//!
//! # Startup Sequence
//!
//! ```text
//! .env 로드 → 로깅 → Config → DB 열기 → 스키마 생성 → 0.0.0.0:PORT 바인드
//! ```
//!
//! 스키마 생성이 실패하면 리스너를 열지 않고 종료한다.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scoreboard_api::{routes, AppState, Config, Database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 환경변수 로드
    dotenvy::dotenv().ok();

    // 로깅 초기화
    // RUST_LOG=debug,sqlx=warn 형태로 레벨 제어 가능
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "scoreboard_api=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🚀 Starting Scoreboard API Server");

    // 설정 로드
    let config = Config::from_env()?;
    tracing::info!("📋 Configuration loaded");

    // 데이터베이스 연결 + 스키마 (요청 받기 전에 한 번)
    let db = Database::open(&config.data_dir, config.max_connections).await?;
    db.init_schema().await?;
    tracing::info!(path = %config.database_path().display(), "✅ Database initialized");

    let app = routes::create_router(AppState::new(Arc::new(db)));

    // 서버 시작 (모든 인터페이스에서 접속 허용)
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🌐 Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
