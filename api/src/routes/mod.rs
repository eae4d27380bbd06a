//! API Routes Module
//!
//! 모든 HTTP 엔드포인트 정의
//!
//! # Routes
//! - `/health` - 헬스 체크
//! - `/api/result` - 경기 결과 제출
//! - `/api/scoreboard` - 최근 경기 20건

pub mod health;
pub mod result;
pub mod scoreboard;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// 라우터 생성
///
/// # Route Structure
///
/// ```text
/// GET  /health            - 서버 상태 확인
/// POST /api/result        - 경기 결과 저장, 승자 반환
/// GET  /api/scoreboard    - 최신순 최대 20건
/// ```
pub fn create_router(state: AppState) -> Router {
    // 어떤 origin에서든 호출 가능 (프론트엔드가 별도 도메인에 배포됨)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))

        // Match results
        .route("/api/result", post(result::submit_result))
        .route("/api/scoreboard", get(scoreboard::get_scoreboard))

        // 미들웨어
        .layer(TraceLayer::new_for_http())
        .layer(cors)

        // 상태 주입
        .with_state(state)
}
