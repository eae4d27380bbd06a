//! Health Check Endpoint
//!
//! 결과 저장이 실제로 가능한지 확인: SQLite 연결 + `matches` 테이블 존재.
//! 둘 중 하나라도 실패하면 503 → 플랫폼 라우터가 트래픽을 보내지 않음.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::AppState;

/// Health check 응답
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "ready" | "degraded"
    pub status: &'static str,
    pub version: &'static str,
    pub storage: StorageStatus,
}

#[derive(Debug, Serialize)]
pub struct StorageStatus {
    pub connected: bool,
    /// `matches` 테이블 생성 완료 여부
    pub schema_ready: bool,
    pub latency_ms: Option<u64>,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let started = std::time::Instant::now();
    let storage = match state.db.schema_ready().await {
        Ok(schema_ready) => StorageStatus {
            connected: true,
            schema_ready,
            latency_ms: Some(started.elapsed().as_millis() as u64),
        },
        Err(e) => {
            tracing::warn!("Storage unreachable: {:#}", e);
            StorageStatus {
                connected: false,
                schema_ready: false,
                latency_ms: None,
            }
        }
    };

    let (code, status) = if storage.connected && storage.schema_ready {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            storage,
        }),
    )
}
