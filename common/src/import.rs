//! 外部CSVの取り込み
//!
//! 列名の契約は無い。ヘッダ行がそのまま新しい列構成になる。

use crate::error::{Error, Result};
use crate::table::Table;

/// CSVバイト列をテーブルにパース
///
/// 失敗時は `Error::Import` にパーサのメッセージを入れて返す。
pub fn parse_csv(bytes: &[u8]) -> Result<Table> {
    let table = Table::from_csv_reader(bytes).map_err(|e| Error::Import(e.to_string()))?;

    if table.columns().is_empty() {
        return Err(Error::Import("No columns to parse from file".to_string()));
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arbitrary_columns() {
        let table = parse_csv(b"Name,Cost\nWidget,10\nGadget,25\n").expect("パース失敗");
        assert_eq!(table.columns(), &["Name".to_string(), "Cost".to_string()]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.value(1, "Cost"), Some("25"));
    }

    #[test]
    fn test_parse_header_only() {
        let table = parse_csv(b"Name,Cost\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns().len(), 2);
    }

    #[test]
    fn test_parse_empty_input() {
        let err = parse_csv(b"").unwrap_err();
        assert!(matches!(err, Error::Import(_)));
        assert!(err.to_string().contains("No columns"));
    }

    #[test]
    fn test_parse_ragged_rows() {
        let err = parse_csv(b"a,b\n1,2\n3,4,5\n").unwrap_err();
        assert!(matches!(err, Error::Import(_)));
    }

    #[test]
    fn test_parse_invalid_utf8() {
        let err = parse_csv(b"Name\n\xff\xfe\n").unwrap_err();
        assert!(matches!(err, Error::Import(_)));
    }
}
