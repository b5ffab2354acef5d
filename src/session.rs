//! 操作セッション
//!
//! 現在のテーブルと取り込み待ちのプレビューを保持する。
//! 変更操作は「保存 → 再読み込み」を行い、再読み込み後のテーブルを返す。

use crate::error::{AppLibraryError, Result};
use crate::store::TableStore;
use app_library_common::{self as common, AppRecord, Filter, Table};
use chrono::{DateTime, Local};

/// 確定前の取り込みデータ
#[derive(Debug, Clone)]
pub struct PendingImport {
    pub table: Table,
    /// 取り込み元（ファイル名など）
    pub source: String,
    pub staged_at: DateTime<Local>,
}

impl PendingImport {
    /// プレビュー見出し（取り込み元・件数・取り込み時刻）
    pub fn summary(&self) -> String {
        format!(
            "{} ({} rows x {} columns, staged {})",
            self.source,
            self.table.len(),
            self.table.columns().len(),
            self.staged_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

pub struct Session {
    store: TableStore,
    table: Table,
    pending: Option<PendingImport>,
}

impl Session {
    /// 保存先を用意してテーブルを読み込む（無ければサンプルを書き出す）
    pub fn open(store: TableStore) -> Result<Self> {
        store.ensure_storage_location()?;
        let table = store.load_or_init()?;
        Ok(Self {
            store,
            table,
            pending: None,
        })
    }

    pub fn store(&self) -> &TableStore {
        &self.store
    }

    /// 現在のテーブル（絞り込み前）
    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn filtered(&self, filter: &Filter) -> Table {
        common::filter(&self.table, filter)
    }

    pub fn choices(&self, column: &str) -> Vec<String> {
        common::choices(&self.table, column)
    }

    /// レコードを追加して保存
    ///
    /// 検証・保存のどちらかで失敗した場合、メモリ上のテーブルは変わらない。
    pub fn append(&mut self, record: &AppRecord) -> Result<&Table> {
        let updated = common::append(&self.table, record)?;
        self.store.save(&updated)?;
        self.table = self.store.load()?;
        tracing::info!(app_name = %record.app_name, rows = self.table.len(), "appended record");
        Ok(&self.table)
    }

    /// CSVをパースしてプレビューに置く（保存はしない）
    pub fn stage_import(&mut self, bytes: &[u8], source: &str) -> Result<&PendingImport> {
        let table = common::parse_csv(bytes).map_err(AppLibraryError::from)?;
        Ok(self.stage_table(table, source))
    }

    /// パース済みテーブルをプレビューに置く
    pub fn stage_table(&mut self, table: Table, source: &str) -> &PendingImport {
        tracing::debug!(source, rows = table.len(), columns = table.columns().len(), "staged import");
        self.pending.insert(PendingImport {
            table,
            source: source.to_string(),
            staged_at: Local::now(),
        })
    }

    pub fn pending_import(&self) -> Option<&PendingImport> {
        self.pending.as_ref()
    }

    /// プレビュー中のテーブルで置き換えて保存。置き換え後の行数を返す
    pub fn confirm_import(&mut self) -> Result<usize> {
        let pending = self.pending.take().ok_or(AppLibraryError::NoPendingImport)?;

        if let Err(e) = self.store.save(&pending.table) {
            self.pending = Some(pending);
            return Err(e);
        }
        self.table = self.store.load()?;

        tracing::info!(source = %pending.source, rows = self.table.len(), "import confirmed");
        Ok(self.table.len())
    }

    /// プレビューを破棄
    pub fn discard_import(&mut self) -> Option<PendingImport> {
        let discarded = self.pending.take();
        if let Some(ref p) = discarded {
            tracing::debug!(source = %p.source, "import discarded");
        }
        discarded
    }

    /// 全行をCSVバイト列に
    pub fn export_csv(&self) -> Result<Vec<u8>> {
        Ok(self.table.to_csv_bytes()?)
    }
}
