//! テーブル（列構成 + 行）とCSVコーデック
//!
//! 列構成は読み込んだファイルのヘッダをそのまま信用する。
//! スキーマ通りの列が保証されるのは `with_schema` / `default_sample` で作ったテーブルのみ。

use crate::error::{Error, Result};
use crate::schema;
use crate::types::AppRecord;
use std::io::{Read, Write};

/// 列名付きの文字列テーブル
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    /// 各行のセル数は常に columns.len() と一致
    rows: Vec<Vec<String>>,
}

impl Table {
    /// 行なし・スキーマ列のテーブル
    pub fn with_schema() -> Self {
        Self::new(schema::schema())
    }

    /// サンプル1行のテーブル
    pub fn default_sample() -> Self {
        let mut table = Self::with_schema();
        table.push_record(&AppRecord::sample());
        table
    }

    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// 列と行から作成。セル数が列数と合わない行があればエラー
    pub fn from_parts(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        if let Some((idx, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            return Err(Error::Import(format!(
                "row {} has {} fields, expected {}",
                idx + 1,
                row.len(),
                columns.len()
            )));
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// 指定列の全セル。列が無ければ None
    pub fn column_values<'a>(&'a self, column: &str) -> Option<impl Iterator<Item = &'a str> + 'a> {
        let idx = self.column_index(column)?;
        Some(self.rows.iter().map(move |row| row[idx].as_str()))
    }

    /// セル値
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| r[idx].as_str())
    }

    /// 条件に合う行だけを残したテーブル（列構成はそのまま）
    pub fn select_rows<F>(&self, mut keep: F) -> Table
    where
        F: FnMut(&[String]) -> bool,
    {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().filter(|row| keep(row.as_slice())).cloned().collect(),
        }
    }

    /// 先頭n行
    pub fn head(&self, n: usize) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// レコードを末尾に追加
    ///
    /// 列名で値を対応付ける。テーブルに無いスキーマ列は末尾に追加し、既存行は空で埋める。
    pub fn push_record(&mut self, record: &AppRecord) {
        for spec in schema::FIELDS.iter() {
            if self.column_index(spec.name).is_none() {
                self.columns.push(spec.name.to_string());
                for row in &mut self.rows {
                    row.push(String::new());
                }
            }
        }

        let row = self
            .columns
            .iter()
            .map(|c| record.get(c).unwrap_or_default().to_string())
            .collect();
        self.rows.push(row);
    }

    /// CSVを読み込む（1行目をヘッダとして扱う）
    ///
    /// 列数の揃っていない行・不正なUTF-8はエラー。
    pub fn from_csv_reader<R: Read>(reader: R) -> std::result::Result<Self, csv::Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { columns, rows })
    }

    /// CSVを書き出す（ヘッダ + 1行1レコード）
    pub fn write_csv<W: Write>(&self, writer: W) -> std::result::Result<(), csv::Error> {
        let mut wtr = csv::WriterBuilder::new().from_writer(writer);
        if !self.columns.is_empty() {
            wtr.write_record(&self.columns)?;
            for row in &self.rows {
                wtr.write_record(row)?;
            }
        }
        wtr.flush()?;
        Ok(())
    }

    /// CSVバイト列
    pub fn to_csv_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        Ok(buf)
    }
}
