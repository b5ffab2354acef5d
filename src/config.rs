use crate::error::{AppLibraryError, Result};
use crate::store::{DEFAULT_DIR, DEFAULT_FILE_NAME};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 台帳CSVを置くディレクトリ（相対パスは作業ディレクトリ基準）
    pub data_dir: PathBuf,
    pub file_name: String,
    /// エクスポート時の既定ファイル名
    pub export_file_name: String,
    /// 一覧表示の列幅（文字数）
    pub cell_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DIR),
            file_name: DEFAULT_FILE_NAME.into(),
            export_file_name: DEFAULT_FILE_NAME.into(),
            cell_width: 28,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AppLibraryError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("app-library").join("config.json"))
    }

    /// コマンドライン引数で上書き（その回の実行だけ。保存はしない）
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, file_name: Option<String>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if let Some(name) = file_name {
            self.file_name = name;
        }
        self
    }

    /// 保存済みの設定を読み直してデータディレクトリだけ書き換える
    pub fn set_data_dir(config_path: &Path, dir: PathBuf) -> Result<Self> {
        let mut config = Self::load_from(config_path)?;
        config.data_dir = dir;
        config.save_to(config_path)?;
        tracing::info!(path = %config_path.display(), data_dir = %config.data_dir.display(), "saved config");
        Ok(config)
    }

    /// 台帳CSVのパス
    pub fn table_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}
