//! Result Service
//!
//! 경기 결과 기록과 최근 결과 조회. 저장소는 생성자로 주입받는다.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;

use super::submission::Submission;
use crate::db::{MatchRecord, MatchRepository, NewMatch};
use crate::types::Winner;

/// scoreboard에 노출되는 최대 건수
pub const SCOREBOARD_LIMIT: u32 = 20;

/// `submit` 결과 (id나 전체 레코드는 반환하지 않음)
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub winner: String,
    pub predicted_level: String,
}

pub struct ResultService {
    repo: Arc<dyn MatchRepository>,
}

impl ResultService {
    pub fn new(repo: Arc<dyn MatchRepository>) -> Self {
        Self { repo }
    }

    /// 승자 계산 후 한 건 저장
    pub async fn submit(&self, submission: Submission) -> Result<SubmitOutcome> {
        let winner = Winner::decide(
            &submission.nickname,
            submission.defender_score,
            submission.attacker_score,
        );

        let new_match = NewMatch {
            nickname: submission.nickname,
            defender_score: submission.defender_score,
            attacker_score: submission.attacker_score,
            time_sec: submission.time_sec,
            winner: winner.label().to_string(),
            predicted_level: submission.predicted_level,
            created_at: timestamp_now(),
        };

        let id = self.repo.insert_match(&new_match).await?;
        tracing::debug!(id, winner = %winner, "match recorded");

        Ok(SubmitOutcome {
            winner: new_match.winner,
            predicted_level: new_match.predicted_level,
        })
    }

    /// 최신순 최대 20건
    pub async fn scoreboard(&self) -> Result<Vec<MatchRecord>> {
        self.repo.recent_matches(SCOREBOARD_LIMIT).await
    }
}

/// 현재 UTC 시각, 고정 폭 ISO-8601 (문자열 정렬 = 시간 정렬)
fn timestamp_now() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
