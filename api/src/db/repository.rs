//! Repository Pattern Implementation
//!
//! 서비스 레이어는 `MatchRepository` trait에만 의존한다.
//! SQLite 구현은 db/mod.rs의 `Database`, 테스트용 Mock은 아래 `mock` 모듈.

use anyhow::Result;
use async_trait::async_trait;

use super::models::{MatchRecord, NewMatch};

/// 경기 결과 저장소 인터페이스
#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// 한 건 INSERT 후 부여된 id 반환
    async fn insert_match(&self, new_match: &NewMatch) -> Result<i64>;

    /// 최신순 (created_at DESC, id DESC) 최대 `limit`건
    async fn recent_matches(&self, limit: u32) -> Result<Vec<MatchRecord>>;
}
