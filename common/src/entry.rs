//! レコード追加
//!
//! 検証は「App Name が空でないこと」のみ。

use crate::error::{Error, Result};
use crate::table::Table;
use crate::types::AppRecord;

/// App Name 未入力時のメッセージ
pub const APP_NAME_REQUIRED: &str = "App Name is required.";

/// 追加前の検証
pub fn validate(record: &AppRecord) -> Result<()> {
    if record.app_name.trim().is_empty() {
        return Err(Error::Validation(APP_NAME_REQUIRED.to_string()));
    }
    Ok(())
}

/// レコードを末尾に追加した新しいテーブルを返す
///
/// 検証エラー時は元のテーブルに触れない。重複するApp Nameもそのまま追加する。
pub fn append(table: &Table, record: &AppRecord) -> Result<Table> {
    validate(record)?;

    let mut updated = table.clone();
    updated.push_record(record);
    Ok(updated)
}
