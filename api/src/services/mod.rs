//! Services Module
//!
//! 비즈니스 로직을 담당하는 서비스 레이어
//!
//! # Services
//! - `Submission`: 요청 payload 타입 변환 (기본값 테이블)
//! - `ResultService`: 경기 결과 기록 / scoreboard 조회

mod results;
mod submission;

pub use results::{ResultService, SubmitOutcome, SCOREBOARD_LIMIT};
pub use submission::{Submission, DEFAULT_NICKNAME, DEFAULT_PREDICTED_LEVEL};
