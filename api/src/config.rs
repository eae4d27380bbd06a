//! Configuration Module
//!
//! 모든 설정은 환경변수에서 읽고, 없으면 기본값을 사용한다.
//! 잘못된 값(숫자가 아닌 PORT 등)은 앱 시작 시점에 바로 실패시킨다 (fail-fast).

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// SQLite 파일 이름 (DATA_DIR 아래에 생성됨)
pub const DATABASE_FILE: &str = "simulator.db";

/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct Config {
    /// 서버 포트 (기본값: 5000)
    pub port: u16,

    /// 데이터베이스 파일이 위치할 디렉터리 (기본값: ./database)
    /// 없으면 시작 시 자동 생성
    pub data_dir: PathBuf,

    /// 커넥션 풀 최대 크기 (기본값: 5)
    pub max_connections: u32,
}

impl Config {
    /// 환경변수에서 설정 로드
    ///
    /// # Optional Environment Variables
    ///
    /// - `PORT`: 서버 포트 (기본값: 5000)
    /// - `DATA_DIR`: DB 디렉터리 (기본값: database)
    /// - `DB_MAX_CONNECTIONS`: 풀 크기 (기본값: 5)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 key → value 조회 함수로부터 설정 생성
    ///
    /// 테스트에서 프로세스 환경변수를 건드리지 않기 위해 분리
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .trim()
                .parse()
                .context("PORT must be a valid number")?,

            data_dir: lookup("DATA_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("database")),

            max_connections: lookup("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|| "5".to_string())
                .trim()
                .parse()
                .context("DB_MAX_CONNECTIONS must be a valid number")?,
        })
    }

    /// SQLite 파일 전체 경로
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}
