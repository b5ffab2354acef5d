//! Excel生成（共通ライブラリ）
//!
//! テーブルをそのまま1シートに書き出す。1行目はヘッダ（太字・固定）。

use crate::table::Table;
use rust_xlsxwriter::*;

/// 列幅（文字数換算）の上限
const MAX_COLUMN_WIDTH: f64 = 60.0;
const MIN_COLUMN_WIDTH: f64 = 10.0;

/// 列幅を内容から決める
fn column_width(table: &Table, col: usize) -> f64 {
    let header = table.columns()[col].chars().count();
    let longest = table
        .rows()
        .iter()
        .map(|row| row[col].lines().map(|l| l.chars().count()).max().unwrap_or(0))
        .max()
        .unwrap_or(0);
    (header.max(longest) as f64 + 2.0).clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH)
}

/// Excelをバッファに生成
///
/// # Arguments
/// * `table` - 出力するテーブル（絞り込み前の全行）
/// * `sheet_name` - シート名
pub fn generate_excel_buffer(table: &Table, sheet_name: &str) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));

    let value_format = Format::new()
        .set_align(FormatAlign::Top)
        .set_text_wrap();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    for (col, name) in table.columns().iter().enumerate() {
        let col = u16::try_from(col).map_err(|_| "列数が多すぎます".to_string())?;
        worksheet.write_string_with_format(0, col, name, &header_format)
            .map_err(|e| format!("ヘッダ書き込みエラー: {}", e))?;
        worksheet.set_column_width(col, column_width(table, col as usize))
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
    }

    for (row_idx, row) in table.rows().iter().enumerate() {
        let excel_row = u32::try_from(row_idx + 1).map_err(|_| "行数が多すぎます".to_string())?;
        for (col, value) in row.iter().enumerate() {
            // 空セルも書式付きの空白として残す（空行が使用範囲から落ちないように）
            let written = if value.is_empty() {
                worksheet.write_blank(excel_row, col as u16, &value_format)
            } else {
                worksheet.write_string_with_format(excel_row, col as u16, value, &value_format)
            };
            written.map_err(|e| format!("値書き込みエラー: {}", e))?;
        }
    }

    if !table.columns().is_empty() {
        worksheet.set_freeze_panes(1, 0)
            .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;
    }

    // バッファに書き出し
    workbook.save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}
