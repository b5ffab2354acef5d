//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use app_library::error::AppLibraryError;
use app_library::session::Session;
use app_library::store::TableStore;
use app_library_common::Table;
use tempfile::tempdir;

/// 保存先ディレクトリを作れない場合は起動できない
#[test]
fn test_open_with_unwritable_location() {
    let dir = tempdir().expect("Failed to create temp dir");
    let blocker = dir.path().join("create_apps");
    std::fs::write(&blocker, "file in the way").unwrap();

    let result = Session::open(TableStore::new(blocker.join("inner"), "app_library.csv"));
    let err = result.err().expect("エラーになるはず");

    assert!(matches!(err, AppLibraryError::Storage { .. }));
    assert!(!err.is_recoverable());
    assert!(err.to_string().contains("create_apps"));
}

/// 壊れた台帳ファイルでは起動できない
#[test]
fn test_open_with_corrupt_table() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = TableStore::new(dir.path(), "app_library.csv");
    std::fs::write(store.path(), "a,b\n1\n").unwrap();

    let err = Session::open(store).err().expect("エラーになるはず");
    assert!(matches!(err, AppLibraryError::CorruptTable { .. }));
}

/// AppLibraryErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        AppLibraryError::Import("bad csv".to_string()),
        AppLibraryError::Validation("App Name is required.".to_string()),
        AppLibraryError::NoPendingImport,
        AppLibraryError::Config("テスト設定エラー".to_string()),
        AppLibraryError::FileNotFound("apps.csv".to_string()),
        AppLibraryError::ExcelGeneration("Excel生成エラー".to_string()),
        AppLibraryError::Prompt("not a terminal".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// Storageエラーはパスと原因をそのまま表示
#[test]
fn test_storage_error_message() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
    let err = AppLibraryError::storage(std::path::Path::new("create_apps"), io_err);

    assert_eq!(err.to_string(), "保存先エラー: create_apps: permission denied");
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: AppLibraryError = io_err.into();

    assert!(matches!(err, AppLibraryError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: AppLibraryError = json_err.into();

    assert!(matches!(err, AppLibraryError::JsonParse(_)));
}

/// 共通ライブラリの検証・取り込みエラーは同名のバリアントへ
#[test]
fn test_common_error_mapping() {
    let err: AppLibraryError = app_library_common::Error::Validation("App Name is required.".into()).into();
    assert!(matches!(err, AppLibraryError::Validation(_)));
    assert!(err.is_recoverable());

    let err: AppLibraryError = app_library_common::Error::Import("bad".into()).into();
    assert!(matches!(err, AppLibraryError::Import(_)));
}

/// その他の共通エラーは透過的に包む
#[test]
fn test_common_error_transparent() {
    let csv_err = Table::from_csv_reader("a,b\n1\n".as_bytes()).unwrap_err();
    let common_err = app_library_common::Error::from(csv_err);
    let expected = common_err.to_string();
    let err: AppLibraryError = common_err.into();

    assert!(matches!(err, AppLibraryError::Common(_)));
    assert!(!err.is_recoverable());
    assert_eq!(err.to_string(), expected);
}

/// 取り込みエラーの表示は利用者向けの文言
#[test]
fn test_import_error_message() {
    let err = AppLibraryError::Import("No columns to parse from file".into());
    assert_eq!(err.to_string(), "取り込みエラー: No columns to parse from file");
}
