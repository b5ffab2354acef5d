//! 台帳ファイル保存・読み込みテスト

use app_library::error::AppLibraryError;
use app_library::store::{self, TableStore};
use app_library_common::schema;
use app_library_common::Table;
use tempfile::tempdir;

fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
    Table::from_parts(
        columns.iter().map(|c| c.to_string()).collect(),
        rows.iter()
            .map(|r| r.iter().map(|v| v.to_string()).collect())
            .collect(),
    )
    .expect("テーブル作成失敗")
}

/// ファイルが無い場合はスキーマ列・0行
#[test]
fn test_load_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let loaded = store::load(&dir.path().join("app_library.csv")).expect("読み込み失敗");

    assert!(loaded.is_empty());
    assert!(schema::is_canonical(loaded.columns()));
}

/// 0バイトのファイルも空テーブル扱い
#[test]
fn test_load_empty_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("app_library.csv");
    std::fs::write(&path, "").unwrap();

    let loaded = store::load(&path).expect("読み込み失敗");
    assert_eq!(loaded, Table::with_schema());
}

/// 空行だけのファイルも空テーブル扱い、保存し直すとヘッダが戻る
#[test]
fn test_load_blank_lines_only() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("app_library.csv");
    std::fs::write(&path, "\n").unwrap();

    let loaded = store::load(&path).expect("読み込み失敗");
    assert_eq!(loaded, Table::with_schema());

    store::save(&loaded, &path).expect("保存失敗");
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("App Name,Problem It Solves,"));
}

/// 保存して読み込むと同じテーブル
#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("app_library.csv");

    let mut original = Table::default_sample();
    let mut record = app_library_common::AppRecord::sample();
    record.app_name = "Quote Builder, v2".into();
    record.notes = "multi\nline \"notes\"".into();
    original.push_record(&record);

    store::save(&original, &path).expect("保存失敗");
    let loaded = store::load(&path).expect("読み込み失敗");

    assert_eq!(loaded, original);
}

/// 列構成の違うファイルもそのまま読み込む
#[test]
fn test_load_trusts_file_header() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("app_library.csv");
    std::fs::write(&path, "Name,Cost\nWidget,10\n").unwrap();

    let loaded = store::load(&path).expect("読み込み失敗");
    assert_eq!(loaded, table(&["Name", "Cost"], &[&["Widget", "10"]]));
}

/// 壊れたCSVはエラー
#[test]
fn test_load_corrupt_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("app_library.csv");
    std::fs::write(&path, "a,b\n1,2,3\n").unwrap();

    let err = store::load(&path).unwrap_err();
    assert!(matches!(err, AppLibraryError::CorruptTable { .. }));
    assert!(err.to_string().contains("app_library.csv"));
}

/// 保存は既存の内容を上書き
#[test]
fn test_save_overwrites() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("app_library.csv");

    store::save(&Table::default_sample(), &path).unwrap();
    store::save(&table(&["Name"], &[]), &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "Name\n");
}

/// ディレクトリ作成は冪等
#[test]
fn test_ensure_storage_location_idempotent() {
    let dir = tempdir().expect("Failed to create temp dir");
    let target = dir.path().join("nested").join("create_apps");

    store::ensure_storage_location(&target).expect("作成失敗");
    store::ensure_storage_location(&target).expect("2回目で失敗");
    assert!(target.is_dir());
}

/// ファイルがある場所にディレクトリは作れない
#[test]
fn test_ensure_storage_location_failure() {
    let dir = tempdir().expect("Failed to create temp dir");
    let blocker = dir.path().join("create_apps");
    std::fs::write(&blocker, "not a directory").unwrap();

    let err = store::ensure_storage_location(&blocker.join("inner")).unwrap_err();
    assert!(matches!(err, AppLibraryError::Storage { .. }));
}

/// 保存先ディレクトリが無ければ書き込みエラー
#[test]
fn test_save_into_missing_dir() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing").join("app_library.csv");

    let err = store::save(&Table::default_sample(), &path).unwrap_err();
    assert!(matches!(err, AppLibraryError::Storage { .. }));
}

/// 初回はサンプルを書き出す（ヘッダ + サンプル1行）
#[test]
fn test_load_or_init_writes_sample() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = TableStore::new(dir.path(), "app_library.csv");

    let table = store.load_or_init().expect("初期化失敗");
    assert_eq!(table, store::default_sample());

    let content = std::fs::read_to_string(store.path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("App Name,Problem It Solves,Submitted By,App Type"));
    assert!(lines[1].starts_with("Invoice Tracker + Reminder Tool,"));
}

/// 既存ファイルがあればサンプルで上書きしない
#[test]
fn test_load_or_init_keeps_existing() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = TableStore::new(dir.path(), "app_library.csv");
    let existing = table(&["Name"], &[&["Kept"]]);
    store.save(&existing).unwrap();

    assert_eq!(store.load_or_init().unwrap(), existing);
}
