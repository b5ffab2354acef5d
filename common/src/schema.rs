//! レコードスキーマ定義
//!
//! アプリ台帳の12列（順序固定）と、入力フォーム用の補助情報。

pub const APP_NAME: &str = "App Name";
pub const PROBLEM_IT_SOLVES: &str = "Problem It Solves";
pub const SUBMITTED_BY: &str = "Submitted By";
pub const APP_TYPE: &str = "App Type";
pub const TECH_STACK: &str = "Tech Stack";
pub const AI_USED: &str = "AI Used?";
pub const USER_INPUTS: &str = "User Inputs";
pub const CORE_OUTPUTS: &str = "Core Outputs";
pub const AUTOMATIONS: &str = "Automations";
pub const VIDEO_TUTORIAL_LINK: &str = "Link to Video Tutorial";
pub const CODE_LINK: &str = "GitHub/Code Link";
pub const NOTES: &str = "Notes / Future Ideas";

/// 列数
pub const FIELD_COUNT: usize = 12;

/// 入力フォームでの扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// 1行入力
    Line,
    /// 複数行想定の入力
    Text,
    /// 選択肢から選ぶ
    Choice(&'static [&'static str]),
}

/// 列定義
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    /// 入力欄のプレースホルダ
    pub hint: &'static str,
    pub kind: InputKind,
}

/// フォームで選べるApp Type
pub const APP_TYPE_OPTIONS: &[&str] = &["Internal tool", "Client-facing", "Public"];

/// 絞り込み対象の列
pub const FILTER_COLUMNS: [&str; 2] = [APP_TYPE, AI_USED];

pub const FIELDS: [FieldSpec; FIELD_COUNT] = [
    FieldSpec { name: APP_NAME, hint: "e.g. Estimate Generator for Plumbers", kind: InputKind::Line },
    FieldSpec { name: PROBLEM_IT_SOLVES, hint: "Describe the main pain point this app solves", kind: InputKind::Text },
    FieldSpec { name: SUBMITTED_BY, hint: "Who requested or inspired this app?", kind: InputKind::Line },
    FieldSpec { name: APP_TYPE, hint: "Internal tool, Client-facing or Public", kind: InputKind::Choice(APP_TYPE_OPTIONS) },
    FieldSpec { name: TECH_STACK, hint: "e.g. Streamlit + Google Sheets + OpenAI API", kind: InputKind::Line },
    FieldSpec { name: AI_USED, hint: "Yes or No, with a short explanation if needed", kind: InputKind::Line },
    FieldSpec { name: USER_INPUTS, hint: "List the inputs a user must fill out", kind: InputKind::Text },
    FieldSpec { name: CORE_OUTPUTS, hint: "What does the app generate or display?", kind: InputKind::Text },
    FieldSpec { name: AUTOMATIONS, hint: "Any behind-the-scenes triggers or scheduled actions?", kind: InputKind::Text },
    FieldSpec { name: VIDEO_TUTORIAL_LINK, hint: "YouTube or Loom link", kind: InputKind::Line },
    FieldSpec { name: CODE_LINK, hint: "Optional: link to the source code", kind: InputKind::Line },
    FieldSpec { name: NOTES, hint: "Ideas for improvement or future features", kind: InputKind::Text },
];

/// 列名一覧（順序固定）
pub fn schema() -> Vec<String> {
    FIELDS.iter().map(|f| f.name.to_string()).collect()
}

/// スキーマと完全一致する列構成か
pub fn is_canonical(columns: &[String]) -> bool {
    columns.len() == FIELD_COUNT && columns.iter().zip(FIELDS.iter()).all(|(c, f)| c == f.name)
}
