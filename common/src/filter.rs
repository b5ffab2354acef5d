//! 絞り込み
//!
//! 列ごとの完全一致条件（またはワイルドカード）をANDで合成する。

use crate::schema;
use crate::table::Table;
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::str::FromStr;

/// ワイルドカードの表記
pub const WILDCARD: &str = "All";

/// 1列分の条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Predicate {
    /// 制約なし
    #[default]
    Any,
    /// 完全一致（大文字小文字を区別）
    Exact(String),
}

impl Predicate {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Predicate::Any => true,
            Predicate::Exact(expected) => expected == value,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Predicate::Any)
    }
}

impl FromStr for Predicate {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == WILDCARD {
            Ok(Predicate::Any)
        } else {
            Ok(Predicate::Exact(s.to_string()))
        }
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Predicate::Any => write!(f, "{}", WILDCARD),
            Predicate::Exact(value) => write!(f, "{}", value),
        }
    }
}

/// 列名 → 条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    predicates: Vec<(String, Predicate)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// App Type / AI Used? の2条件
    pub fn app_type_and_ai_used(app_type: Predicate, ai_used: Predicate) -> Self {
        Self::new()
            .with(schema::APP_TYPE, app_type)
            .with(schema::AI_USED, ai_used)
    }

    /// 条件を追加（同じ列なら置き換え）
    pub fn with(mut self, column: impl Into<String>, predicate: Predicate) -> Self {
        let column = column.into();
        match self.predicates.iter_mut().find(|(c, _)| *c == column) {
            Some((_, existing)) => *existing = predicate,
            None => self.predicates.push((column, predicate)),
        }
        self
    }

    pub fn predicates(&self) -> &[(String, Predicate)] {
        &self.predicates
    }

    pub fn is_wildcard(&self) -> bool {
        self.predicates.iter().all(|(_, p)| p.is_wildcard())
    }
}

/// 条件に一致する行だけのテーブルを返す
///
/// 空テーブルはそのまま返す。テーブルに無い列への具体値条件はどの行にも一致しない。
pub fn filter(table: &Table, filter: &Filter) -> Table {
    if table.is_empty() || filter.is_wildcard() {
        return table.clone();
    }

    let mut checks = Vec::new();
    for (column, predicate) in filter.predicates() {
        if predicate.is_wildcard() {
            continue;
        }
        match table.column_index(column) {
            Some(idx) => checks.push((idx, predicate)),
            None => return table.select_rows(|_| false),
        }
    }

    table.select_rows(|row| checks.iter().all(|(idx, p)| p.matches(&row[*idx])))
}

/// 選択肢: 先頭にワイルドカード、続いて空でない値の重複なしソート済み一覧
///
/// 呼び出しごとに現在のテーブルから計算する。
pub fn choices(table: &Table, column: &str) -> Vec<String> {
    let mut result = vec![WILDCARD.to_string()];

    if let Some(values) = table.column_values(column) {
        let distinct: BTreeSet<&str> = values.filter(|v| !v.trim().is_empty()).collect();
        result.extend(distinct.into_iter().map(str::to_string));
    }

    result
}
