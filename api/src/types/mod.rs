//! Common Types Module
//!
//! 애플리케이션 전반에서 사용되는 공통 타입 정의

use std::fmt;

/// Attacker 승리 시 winner 라벨
pub const ATTACKER_LABEL: &str = "Attacker";

/// 무승부 라벨
pub const DRAW_LABEL: &str = "Draw";

/// 경기 승자
///
/// 요청에 역할 필드가 없으므로 nickname을 보낸 쪽이 defender로 간주됨
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Winner {
    /// defender 승리: 라벨은 제출자의 nickname
    Defender(String),
    Attacker,
    Draw,
}

impl Winner {
    /// 두 점수로 승자 결정 (순수 함수)
    pub fn decide(nickname: &str, defender_score: i64, attacker_score: i64) -> Self {
        if defender_score > attacker_score {
            Winner::Defender(nickname.to_string())
        } else if attacker_score > defender_score {
            Winner::Attacker
        } else {
            Winner::Draw
        }
    }

    /// 저장/응답에 쓰이는 문자열
    pub fn label(&self) -> &str {
        match self {
            Winner::Defender(nickname) => nickname,
            Winner::Attacker => ATTACKER_LABEL,
            Winner::Draw => DRAW_LABEL,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
