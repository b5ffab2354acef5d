use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppLibraryError {
    /// ディレクトリ作成・ファイル書き込みの失敗（起動時なら致命的）
    #[error("保存先エラー: {path}: {source}")]
    Storage {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("台帳ファイルが不正なCSVです: {path}: {message}")]
    CorruptTable { path: String, message: String },

    /// 取り込みデータの不備（現在のテーブルはそのまま）
    #[error("取り込みエラー: {0}")]
    Import(String),

    /// 入力レコードの不備（現在のテーブルはそのまま）
    #[error("{0}")]
    Validation(String),

    #[error("確定待ちの取り込みがありません")]
    NoPendingImport,

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(app_library_common::Error),
}

impl AppLibraryError {
    pub fn storage(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Storage {
            path: path.display().to_string(),
            source,
        }
    }

    /// 操作をやり直せば済むエラーか（テーブル・ファイルは無傷）
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Import(_) | Self::Validation(_) | Self::NoPendingImport)
    }
}

impl From<app_library_common::Error> for AppLibraryError {
    fn from(err: app_library_common::Error) -> Self {
        match err {
            app_library_common::Error::Validation(message) => Self::Validation(message),
            app_library_common::Error::Import(message) => Self::Import(message),
            other => Self::Common(other),
        }
    }
}

impl From<dialoguer::Error> for AppLibraryError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Prompt(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppLibraryError>;
