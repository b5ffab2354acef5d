//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 入力レコードの検証エラー（メッセージはそのまま利用者に表示）
    #[error("{0}")]
    Validation(String),

    /// 取り込みデータのパースエラー
    #[error("Import error: {0}")]
    Import(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
