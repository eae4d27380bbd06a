//! Scoreboard Endpoint

use axum::{extract::State, Json};

use crate::{db::MatchRecord, error::ApiError, AppState};

/// GET /api/scoreboard
///
/// 최근 경기 최대 20건, 최신순. 테이블이 비어 있으면 `[]`.
///
/// # Response
///
/// ```json
/// [
///   {
///     "id": 42,
///     "nickname": "Ana",
///     "defender_score": 5,
///     "attacker_score": 3,
///     "time_sec": 12.4,
///     "winner": "Ana",
///     "predicted_level": "Pro",
///     "created_at": "2024-01-15T10:30:00.123456"
///   }
/// ]
/// ```
pub async fn get_scoreboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<MatchRecord>>, ApiError> {
    let matches = state.results.scoreboard().await?;
    Ok(Json(matches))
}
