//! Error Handling Module
//!
//! Maps domain failures onto HTTP status codes.
//! Uses thiserror for the error type and tracing for server-side details.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API 에러 타입
///
/// - 클라이언트 에러: 4xx (파싱할 수 없는 요청 본문)
/// - 서버 에러: 5xx (저장소 장애 등)
///
/// 점수 값이 숫자가 아닌 경우는 에러가 아님 (0으로 대체됨)
#[derive(Debug, Error)]
pub enum ApiError {
    // ============ 400 Bad Request ============
    #[error("Invalid request: {0}")]
    BadRequest(String),

    // ============ 500 Internal Server Error ============
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// API 에러 응답 구조
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                "Malformed request body".to_string(),
                Some(msg.clone()),
            ),

            // 내부 에러는 클라이언트에 상세 정보 노출 안 함
            // 로그는 여기서 한 번만 남김 (원인 체인 포함)
            ApiError::DatabaseError(cause) => {
                tracing::error!("Database error: {}", cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "Database error occurred".to_string(),
                    None,
                )
            }
            ApiError::InternalError(cause) => {
                tracing::error!("Internal error: {}", cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// anyhow 에러를 ApiError로 변환
///
/// 저장소 레이어는 anyhow::Result를 반환하므로 원인이 sqlx면 DatabaseError로 분류.
/// `{:#}` 포맷으로 context 체인 전체를 보존하고, 로깅은 응답 변환 시점에 한 번.
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        if err.downcast_ref::<sqlx::Error>().is_some() {
            ApiError::DatabaseError(format!("{:#}", err))
        } else {
            ApiError::InternalError(format!("{:#}", err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let bad = ApiError::BadRequest("expected a JSON object".to_string()).into_response();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

        let db = ApiError::DatabaseError("disk I/O error".to_string()).into_response();
        assert_eq!(db.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let internal = ApiError::InternalError("boom".to_string()).into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_anyhow_sqlx_is_database_error() {
        let err = anyhow::Error::new(sqlx::Error::PoolTimedOut).context("insert match");
        assert!(matches!(ApiError::from(err), ApiError::DatabaseError(_)));

        let err = anyhow::anyhow!("something else");
        assert!(matches!(ApiError::from(err), ApiError::InternalError(_)));
    }

    #[test]
    fn test_database_error_keeps_context_chain() {
        let err = anyhow::Error::new(sqlx::Error::PoolTimedOut).context("failed to insert match");

        match ApiError::from(err) {
            ApiError::DatabaseError(cause) => {
                assert!(cause.starts_with("failed to insert match: "));
                assert!(cause.len() > "failed to insert match: ".len());
            }
            other => panic!("expected DatabaseError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_body_hides_cause() {
        let response = ApiError::DatabaseError("no such table: matches".to_string()).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["code"], "DATABASE_ERROR");
        assert!(!body.to_string().contains("no such table"));
    }
}
