//! App Library Common Library
//!
//! アプリ台帳のスキーマ・テーブル・絞り込み・追加・取り込み

pub mod error;
pub mod schema;
pub mod types;
pub mod table;
pub mod filter;
pub mod entry;
pub mod import;
pub mod export;

pub use error::{Error, Result};
pub use types::AppRecord;
pub use table::Table;
pub use filter::{Filter, Predicate, WILDCARD, choices, filter};
pub use entry::{APP_NAME_REQUIRED, append, validate};
pub use import::parse_csv;
