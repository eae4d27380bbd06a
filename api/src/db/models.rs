//! Database Models
//!
//! One table, `matches`. Rows are append-only: no update or delete exists.

use serde::Serialize;
use sqlx::FromRow;

/// 저장된 경기 결과 (scoreboard 응답에 그대로 직렬화됨)
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct MatchRecord {
    /// AUTOINCREMENT: 삭제 후에도 재사용되지 않음
    pub id: i64,

    pub nickname: String,

    pub defender_score: i64,

    pub attacker_score: i64,

    /// 경기 소요 시간 (초)
    pub time_sec: f64,

    /// nickname, "Attacker", "Draw" 중 하나
    pub winner: String,

    /// 클라이언트가 보낸 예상 레벨 (공백 제거됨)
    pub predicted_level: String,

    /// UTC, `YYYY-MM-DDTHH:MM:SS.ffffff`
    pub created_at: String,
}

/// INSERT 할 새 경기 (id는 DB가 부여)
#[derive(Debug, Clone, PartialEq)]
pub struct NewMatch {
    pub nickname: String,
    pub defender_score: i64,
    pub attacker_score: i64,
    pub time_sec: f64,
    pub winner: String,
    pub predicted_level: String,
    pub created_at: String,
}

impl NewMatch {
    /// DB가 부여한 id를 붙여 레코드로 변환
    pub fn into_record(self, id: i64) -> MatchRecord {
        MatchRecord {
            id,
            nickname: self.nickname,
            defender_score: self.defender_score,
            attacker_score: self.attacker_score,
            time_sec: self.time_sec,
            winner: self.winner,
            predicted_level: self.predicted_level,
            created_at: self.created_at,
        }
    }
}
