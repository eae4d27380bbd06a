//! Database Module
//!
//! SQLite 파일 하나 (`<DATA_DIR>/simulator.db`)에 `matches` 테이블 하나.
//!
//! - 스키마 생성은 `CREATE TABLE IF NOT EXISTS` 한 문장 → 몇 번을 호출해도 안전
//! - 서버가 요청을 받기 전에 `main`에서 한 번 호출 (런타임 플래그 없음)
//! - 각 쿼리는 풀에서 커넥션을 빌려 쓰고, 성공/실패와 무관하게 반환됨

mod models;
mod repository;

pub use models::*;
pub use repository::MatchRepository;
#[cfg(test)]
pub use repository::mock;

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::DATABASE_FILE;

const CREATE_MATCHES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS matches (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nickname TEXT NOT NULL,
        defender_score INTEGER NOT NULL,
        attacker_score INTEGER NOT NULL,
        time_sec REAL NOT NULL,
        winner TEXT NOT NULL,
        predicted_level TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
"#;

/// 데이터베이스 연결 및 쿼리 담당
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// `data_dir` 아래 DB 파일 열기 (디렉터리/파일이 없으면 생성)
    ///
    /// # Connection Pool Settings
    ///
    /// - max_connections: 설정값 (기본 5)
    /// - acquire_timeout: 3초 (커넥션 획득 대기)
    pub async fn open(data_dir: &Path, max_connections: u32) -> Result<Self> {
        tokio::fs::create_dir_all(data_dir)
            .await
            .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

        let db_path = data_dir.join(DATABASE_FILE);
        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(options)
            .await
            .with_context(|| format!("failed to open database {}", db_path.display()))?;

        Ok(Self { pool })
    }

    /// `matches` 테이블 생성 (이미 있으면 아무 일도 안 함)
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(CREATE_MATCHES_TABLE)
            .execute(&self.pool)
            .await
            .context("failed to create matches table")?;
        Ok(())
    }

    /// Health check: 연결 확인 + `matches` 테이블 존재 여부
    ///
    /// 연결 자체가 실패하면 Err, 테이블이 없으면 `Ok(false)`
    pub async fn schema_ready(&self) -> Result<bool> {
        let tables = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'matches'",
        )
        .fetch_one(&self.pool)
        .await
        .context("failed to inspect schema")?;

        Ok(tables == 1)
    }
}

#[async_trait]
impl MatchRepository for Database {
    async fn insert_match(&self, new_match: &NewMatch) -> Result<i64> {
        // 단일 INSERT → 실패 시 부분 레코드 없음
        let result = sqlx::query(
            r#"
            INSERT INTO matches (
                nickname, defender_score, attacker_score, time_sec,
                winner, predicted_level, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new_match.nickname)
        .bind(new_match.defender_score)
        .bind(new_match.attacker_score)
        .bind(new_match.time_sec)
        .bind(&new_match.winner)
        .bind(&new_match.predicted_level)
        .bind(&new_match.created_at)
        .execute(&self.pool)
        .await
        .context("failed to insert match")?;

        Ok(result.last_insert_rowid())
    }

    async fn recent_matches(&self, limit: u32) -> Result<Vec<MatchRecord>> {
        // created_at이 같은 경우 id로 최신순 보장
        let matches = sqlx::query_as::<_, MatchRecord>(
            r#"
            SELECT
                id,
                nickname,
                defender_score,
                attacker_score,
                time_sec,
                winner,
                predicted_level,
                created_at
            FROM matches
            ORDER BY created_at DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .context("failed to load recent matches")?;

        Ok(matches)
    }
}
