// ============================================
// src/config.rs
// 設定ファイル (JSON) の読み込み
// ============================================

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::topics::Topic;

const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "guia.log";
/// delay_scale の上限
pub const MAX_DELAY_SCALE: f64 = 100.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid setting: {0}")]
    Invalid(String),
}

/// アプリの設定 (すべて省略可)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 起動時に開くトピック
    pub start_topic: Topic,
    /// キー入力のポーリング間隔 (ミリ秒)
    pub poll_interval_ms: u64,
    /// 次の問題までの待ち時間の倍率 (0 で即時)
    pub delay_scale: f64,
    /// ログファイルの場所 (省略時はデータディレクトリ)
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_topic: Topic::Welcome,
            poll_interval_ms: 50,
            delay_scale: 1.0,
            log_file: None,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "GuiaEspanol", "guia")
}

impl Settings {
    /// 既定の設定ファイルのパス
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// MARK:設定を読み込む
    ///
    /// パスを明示した場合はファイルが必須。既定のパスに無ければ初期値
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let settings = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=MAX_DELAY_SCALE).contains(&self.delay_scale) {
            return Err(ConfigError::Invalid(format!(
                "delay_scale must be between 0 and {MAX_DELAY_SCALE}, got {}",
                self.delay_scale
            )));
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::Invalid("poll_interval_ms must be at least 1".into()));
        }
        Ok(())
    }

    /// ログの出力先 (データディレクトリが取れなければカレントディレクトリ)
    pub fn log_path(&self) -> PathBuf {
        if let Some(path) = &self.log_file {
            return path.clone();
        }
        match project_dirs() {
            Some(dirs) => dirs.data_local_dir().join(LOG_FILE),
            None => PathBuf::from(LOG_FILE),
        }
    }
}
