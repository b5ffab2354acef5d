//! Excel生成（CLI版）

use crate::error::{AppLibraryError, Result};
use app_library_common::export::excel_core;
use app_library_common::Table;
use std::path::Path;

const SHEET_NAME: &str = "App Library";

pub fn generate_excel(table: &Table, output_path: &Path) -> Result<()> {
    let buffer = excel_core::generate_excel_buffer(table, SHEET_NAME)
        .map_err(AppLibraryError::ExcelGeneration)?;

    std::fs::write(output_path, buffer)
        .map_err(|e| AppLibraryError::ExcelGeneration(format!("{}: {}", output_path.display(), e)))?;

    Ok(())
}
