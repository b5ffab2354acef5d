//! 取り込みファイルの読み込み
//!
//! CSVはバイト列のままセッションに渡し、表計算ファイルは先頭シートをテーブルに変換する。

use crate::error::{AppLibraryError, Result};
use app_library_common::Table;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// 取り込みファイルの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    Csv,
    Spreadsheet,
}

impl ImportKind {
    /// 拡張子から判定（不明ならCSV扱い）
    pub fn detect(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "xlsx" | "xlsm" | "xls" | "ods" => ImportKind::Spreadsheet,
            _ => ImportKind::Csv,
        }
    }
}

/// 取り込み元の内容
pub enum ImportPayload {
    Csv(Vec<u8>),
    Table(Table),
}

/// ファイルを読み込む
pub fn read_import_file(path: &Path) -> Result<ImportPayload> {
    if !path.is_file() {
        return Err(AppLibraryError::FileNotFound(path.display().to_string()));
    }

    match ImportKind::detect(path) {
        ImportKind::Csv => Ok(ImportPayload::Csv(std::fs::read(path)?)),
        ImportKind::Spreadsheet => Ok(ImportPayload::Table(read_spreadsheet(path)?)),
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// 先頭シートを読み込む（1行目がヘッダ）
///
/// 使用範囲内の空行もそのまま1行として残す。
pub fn read_spreadsheet(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| AppLibraryError::Import(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppLibraryError::Import(format!("{}: workbook has no sheets", path.display())))?
        .map_err(|e| AppLibraryError::Import(format!("{}: {}", path.display(), e)))?;

    let mut rows = range.rows();
    let columns: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(cell_text).collect(),
        None => return Err(AppLibraryError::Import("No columns to parse from file".into())),
    };

    let body: Vec<Vec<String>> = rows.map(|row| row.iter().map(cell_text).collect()).collect();

    Ok(Table::from_parts(columns, body)?)
}
