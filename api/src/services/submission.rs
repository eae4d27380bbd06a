//! Submission Coercion
//!
//! 클라이언트 payload를 관대하게 타입 변환한다. 변환은 절대 실패하지 않는다.
//!
//! # Default Table
//!
//! | key               | 타입   | 허용                                          | 기본값        |
//! |-------------------|--------|-----------------------------------------------|---------------|
//! | `nickname`        | String | 문자열 그대로, 숫자/bool은 텍스트로            | `"anonymous"` |
//! | `defenderScore`   | i64    | 정수, 실수(0 방향 절삭), 숫자 문자열, bool    | `0`           |
//! | `attackerScore`   | i64    | 위와 동일                                     | `0`           |
//! | `timeSec`         | f64    | 숫자, 숫자 문자열, bool (유한값만)            | `0.0`         |
//! | `predicted_level` | String | 문자열 (앞뒤 공백 제거), 숫자/bool은 텍스트로  | `"Beginner"`  |
//!
//! `null`은 누락과 같고, 알 수 없는 key는 무시된다.
//! f64로 표현할 수 없는 숫자(`1e400` 등)도 숫자가 아닌 값으로 보고 기본값을 쓴다.

use serde_json::{Map, Value};

pub const DEFAULT_NICKNAME: &str = "anonymous";
pub const DEFAULT_PREDICTED_LEVEL: &str = "Beginner";

/// 타입 변환이 끝난 제출 데이터
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub nickname: String,
    pub defender_score: i64,
    pub attacker_score: i64,
    pub time_sec: f64,
    pub predicted_level: String,
}

impl Default for Submission {
    fn default() -> Self {
        Self {
            nickname: DEFAULT_NICKNAME.to_string(),
            defender_score: 0,
            attacker_score: 0,
            time_sec: 0.0,
            predicted_level: DEFAULT_PREDICTED_LEVEL.to_string(),
        }
    }
}

impl Submission {
    /// JSON object → Submission
    pub fn from_payload(payload: &Map<String, Value>) -> Self {
        let field = |key: &str| payload.get(key).filter(|v| !v.is_null());

        Self {
            nickname: field("nickname")
                .and_then(coerce_text)
                .unwrap_or_else(|| DEFAULT_NICKNAME.to_string()),
            defender_score: field("defenderScore").map(coerce_int).unwrap_or(0),
            attacker_score: field("attackerScore").map(coerce_int).unwrap_or(0),
            time_sec: field("timeSec").map(coerce_float).unwrap_or(0.0),
            predicted_level: field("predicted_level")
                .and_then(coerce_text)
                .map(|level| level.trim().to_string())
                .unwrap_or_else(|| DEFAULT_PREDICTED_LEVEL.to_string()),
        }
    }
}

fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn coerce_int(value: &Value) -> i64 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else if n.as_u64().is_some() {
                i64::MAX
            } else {
                // `as` 는 범위 밖 값을 포화시킴
                n.as_f64().map(|f| f.trunc() as i64).unwrap_or(0)
            }
        }
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().unwrap_or_else(|_| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
                    .unwrap_or(0)
            })
        }
        Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}

fn coerce_float(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    // NaN/inf는 SQLite REAL에 저장 불가
    parsed.filter(|f| f.is_finite()).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn submission(value: Value) -> Submission {
        match value {
            Value::Object(map) => Submission::from_payload(&map),
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_empty_payload_uses_defaults() {
        assert_eq!(submission(json!({})), Submission::default());
    }

    #[test]
    fn test_full_payload() {
        let s = submission(json!({
            "nickname": "Ana",
            "defenderScore": 5,
            "attackerScore": 3,
            "timeSec": 12.4,
            "predicted_level": "Pro"
        }));

        assert_eq!(
            s,
            Submission {
                nickname: "Ana".to_string(),
                defender_score: 5,
                attacker_score: 3,
                time_sec: 12.4,
                predicted_level: "Pro".to_string(),
            }
        );
    }

    #[test]
    fn test_predicted_level_trimmed() {
        let s = submission(json!({ "predicted_level": "  Advanced  " }));
        assert_eq!(s.predicted_level, "Advanced");
    }

    #[test]
    fn test_nickname_not_trimmed() {
        let s = submission(json!({ "nickname": " Ana " }));
        assert_eq!(s.nickname, " Ana ");
    }

    #[test]
    fn test_non_numeric_scores_become_zero() {
        let s = submission(json!({
            "defenderScore": "abc",
            "attackerScore": [1, 2],
            "timeSec": { "value": 3 }
        }));

        assert_eq!(s.defender_score, 0);
        assert_eq!(s.attacker_score, 0);
        assert_eq!(s.time_sec, 0.0);
    }

    #[test]
    fn test_null_is_missing() {
        let s = submission(json!({
            "nickname": null,
            "defenderScore": null,
            "timeSec": null,
            "predicted_level": null
        }));
        assert_eq!(s, Submission::default());
    }

    #[test]
    fn test_numeric_strings_and_floats() {
        let s = submission(json!({
            "defenderScore": " 7 ",
            "attackerScore": 4.9,
            "timeSec": "12.5"
        }));

        assert_eq!(s.defender_score, 7);
        assert_eq!(s.attacker_score, 4);
        assert_eq!(s.time_sec, 12.5);

        let s = submission(json!({ "defenderScore": "-3.7", "attackerScore": -2.5 }));
        assert_eq!(s.defender_score, -3);
        assert_eq!(s.attacker_score, -2);
    }

    #[test]
    fn test_bools_and_large_numbers() {
        let s = submission(json!({
            "defenderScore": true,
            "attackerScore": u64::MAX,
            "timeSec": false
        }));

        assert_eq!(s.defender_score, 1);
        assert_eq!(s.attacker_score, i64::MAX);
        assert_eq!(s.time_sec, 0.0);
    }

    #[test]
    fn test_non_finite_time_is_zero() {
        let s = submission(json!({ "timeSec": "inf" }));
        assert_eq!(s.time_sec, 0.0);

        let s = submission(json!({ "timeSec": "NaN" }));
        assert_eq!(s.time_sec, 0.0);
    }

    #[test]
    fn test_numbers_beyond_f64_range_become_zero() {
        let s = submission(serde_json::from_str(r#"{"attackerScore": -1e400, "timeSec": 1e999}"#).unwrap());
        assert_eq!(s.attacker_score, 0);
        assert_eq!(s.time_sec, 0.0);
    }

    #[test]
    fn test_non_string_text_fields() {
        let s = submission(json!({ "nickname": 42, "predicted_level": ["Pro"] }));
        assert_eq!(s.nickname, "42");
        assert_eq!(s.predicted_level, DEFAULT_PREDICTED_LEVEL);
    }
}
