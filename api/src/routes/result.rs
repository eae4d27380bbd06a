//! Result Submission Endpoint
//!
//! Accepts a finished game, derives the winner and stores one match row.

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{error::ApiError, services::Submission, AppState};

// ============ Request/Response Types ============

/// 결과 제출 응답
#[derive(Debug, Serialize)]
pub struct SubmitResultResponse {
    /// nickname (defender 승), "Attacker", "Draw"
    pub winner: String,
    /// 공백 제거/기본값 적용된 예상 레벨
    pub predicted_level: String,
}

// ============ Handlers ============

/// POST /api/result
///
/// # Request
///
/// ```json
/// {
///   "nickname": "Ana",
///   "defenderScore": 5,
///   "attackerScore": 3,
///   "timeSec": 12.4,
///   "predicted_level": "Pro"
/// }
/// ```
///
/// 모든 필드는 생략 가능. 본문이 JSON object가 아니면 400.
pub async fn submit_result(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SubmitResultResponse>, ApiError> {
    let payload = parse_payload(&body)?;
    let submission = Submission::from_payload(&payload);

    let outcome = state.results.submit(submission).await?;

    Ok(Json(SubmitResultResponse {
        winner: outcome.winner,
        predicted_level: outcome.predicted_level,
    }))
}

// ============ Helpers ============

/// 요청 본문 → JSON object (빈 본문은 `{}`로 취급)
fn parse_payload(body: &[u8]) -> Result<Map<String, Value>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ApiError::BadRequest("expected a JSON object".to_string())),
        Err(e) => Err(ApiError::BadRequest(format!("invalid JSON: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload_empty_body() {
        assert!(parse_payload(b"").unwrap().is_empty());
        assert!(parse_payload(b"  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_payload_object() {
        let map = parse_payload(br#"{"nickname":"Ana"}"#).unwrap();
        assert_eq!(map.get("nickname"), Some(&Value::String("Ana".to_string())));
    }

    #[test]
    fn test_parse_payload_rejects_malformed() {
        assert!(matches!(parse_payload(b"{not json"), Err(ApiError::BadRequest(_))));
        assert!(matches!(parse_payload(b"[1, 2]"), Err(ApiError::BadRequest(_))));
        assert!(matches!(parse_payload(b"null"), Err(ApiError::BadRequest(_))));
        assert!(matches!(parse_payload(b"\"Ana\""), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_parse_payload_out_of_range_number() {
        // f64 범위를 넘는 숫자도 유효한 JSON → 파싱은 성공, 값은 변환 단계에서 0
        let map = parse_payload(br#"{"defenderScore":1e400,"timeSec":-1e999}"#).unwrap();
        let submission = Submission::from_payload(&map);

        assert_eq!(submission.defender_score, 0);
        assert_eq!(submission.time_sec, 0.0);
    }
}
