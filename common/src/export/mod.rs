//! CLIから使う出力コア

#[cfg(feature = "excel")]
pub mod excel_core;
