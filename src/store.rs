//! 台帳CSVの保存・読み込み
//!
//! 初回起動時はサンプル1行を書き出し、以降は常にファイルが存在する状態にする。

use crate::config::Config;
use crate::error::{AppLibraryError, Result};
use app_library_common::Table;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_DIR: &str = "create_apps";
pub const DEFAULT_FILE_NAME: &str = "app_library.csv";

/// 保存先ディレクトリを作成（既にあれば何もしない）
pub fn ensure_storage_location(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| AppLibraryError::storage(dir, e))
}

/// CSVを読み込む
///
/// - ファイルが無い → 行なし・スキーマ列のテーブル
/// - 0バイト・ヘッダ行なし → 同上（警告のみ）
/// - ヘッダはファイルのものをそのまま使う
pub fn load(path: &Path) -> Result<Table> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "table file not found, using empty schema table");
            return Ok(Table::with_schema());
        }
        Err(e) => return Err(AppLibraryError::storage(path, e)),
    };

    let is_empty = file
        .metadata()
        .map(|m| m.len() == 0)
        .map_err(|e| AppLibraryError::storage(path, e))?;
    if is_empty {
        tracing::warn!(path = %path.display(), "table file is empty, using empty schema table");
        return Ok(Table::with_schema());
    }

    let table = Table::from_csv_reader(BufReader::new(file)).map_err(|e| {
        AppLibraryError::CorruptTable {
            path: path.display().to_string(),
            message: e.to_string(),
        }
    })?;

    if table.columns().is_empty() {
        tracing::warn!(path = %path.display(), "table file has no header, using empty schema table");
        return Ok(Table::with_schema());
    }

    tracing::debug!(path = %path.display(), rows = table.len(), columns = table.columns().len(), "loaded table");
    Ok(table)
}

/// CSVを書き出す（既存の内容は上書き）
pub fn save(table: &Table, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| AppLibraryError::storage(path, e))?;
    let mut writer = BufWriter::new(file);

    table
        .write_csv(&mut writer)
        .map_err(|e| AppLibraryError::storage(path, std::io::Error::from(e)))?;
    writer.flush().map_err(|e| AppLibraryError::storage(path, e))?;

    tracing::debug!(path = %path.display(), rows = table.len(), "saved table");
    Ok(())
}

/// 初回用のサンプルテーブル
pub fn default_sample() -> Table {
    Table::default_sample()
}

/// 台帳ファイルの場所と読み書き
#[derive(Debug, Clone)]
pub struct TableStore {
    dir: PathBuf,
    file_name: String,
}

impl TableStore {
    pub fn new(dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            file_name: file_name.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.data_dir.clone(), config.file_name.clone())
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    pub fn ensure_storage_location(&self) -> Result<()> {
        ensure_storage_location(&self.dir)
    }

    pub fn exists(&self) -> bool {
        self.path().is_file()
    }

    pub fn load(&self) -> Result<Table> {
        load(&self.path())
    }

    pub fn save(&self, table: &Table) -> Result<()> {
        save(table, &self.path())
    }

    /// ファイルがあれば読み込み、無ければサンプルを書き出して返す
    pub fn load_or_init(&self) -> Result<Table> {
        if self.exists() {
            return self.load();
        }

        let table = default_sample();
        self.save(&table)?;
        tracing::info!(path = %self.path().display(), "created table file with sample record");
        Ok(table)
    }
}
