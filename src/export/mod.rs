pub mod excel;

use crate::cli::ExportFormat;
use crate::error::{AppLibraryError, Result};
use crate::store::ensure_storage_location;
use app_library_common::Table;
use std::path::{Path, PathBuf};

/// 出力先を決める
///
/// ディレクトリ・拡張子なし → `<stem>.<ext>` をその下に。
/// 形式と違う拡張子 → 拡張子を差し替える。
fn output_path_for_format(output: &Path, file_stem: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        return output.join(format!("{}.{}", file_stem, extension));
    }

    let matches_format = output
        .extension()
        .map(|e| e.eq_ignore_ascii_case(extension))
        .unwrap_or(false);
    if matches_format {
        output.to_path_buf()
    } else {
        let corrected = output.with_extension(extension);
        tracing::warn!(
            requested = %output.display(),
            path = %corrected.display(),
            "output extension does not match export format"
        );
        corrected
    }
}

/// エクスポート名（"app_library.csv"）から拡張子を除いた部分
fn export_stem(export_file_name: &str) -> &str {
    Path::new(export_file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("app_library")
}

/// テーブル全体（絞り込み前）を書き出す。書き出したパスを返す
pub fn export_table(
    table: &Table,
    format: &ExportFormat,
    output: &Path,
    export_file_name: &str,
) -> Result<PathBuf> {
    let stem = export_stem(export_file_name);

    let output_path = output_path_for_format(output, stem, format.extension());
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_storage_location(parent)?;
    }

    match format {
        ExportFormat::Csv => {
            let bytes = table.to_csv_bytes()?;
            std::fs::write(&output_path, bytes)
                .map_err(|e| AppLibraryError::storage(&output_path, e))?;
        }
        ExportFormat::Xlsx => excel::generate_excel(table, &output_path)?,
    }

    tracing::info!(path = %output_path.display(), rows = table.len(), "exported table");
    Ok(output_path)
}
