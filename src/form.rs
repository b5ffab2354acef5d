//! 対話式のレコード入力フォーム

use crate::error::Result;
use app_library_common::schema::{FieldSpec, InputKind, FIELDS};
use app_library_common::AppRecord;
use dialoguer::{Confirm, Input, Select};

/// 全項目を順に入力させる
///
/// `draft` の値を初期値として表示する（検証エラー後の再入力用）。
pub fn prompt_record(draft: &AppRecord) -> Result<AppRecord> {
    let mut record = draft.clone();

    for spec in FIELDS.iter() {
        let current = draft.get(spec.name).unwrap_or_default();
        let value = prompt_field(spec, current)?;
        record.set(spec.name, value);
    }

    Ok(record)
}

fn prompt_field(spec: &FieldSpec, current: &str) -> Result<String> {
    match spec.kind {
        InputKind::Choice(options) => {
            let default = options.iter().position(|o| *o == current).unwrap_or(0);
            let idx = Select::new()
                .with_prompt(spec.name)
                .items(options)
                .default(default)
                .interact()?;
            Ok(options[idx].to_string())
        }
        InputKind::Line | InputKind::Text => {
            // 複数行は「\n」で区切って入力
            let prompt = match spec.kind {
                InputKind::Text => format!("{} ({}; \\n for line break)", spec.name, spec.hint),
                _ => format!("{} ({})", spec.name, spec.hint),
            };
            let input: String = Input::new()
                .with_prompt(prompt)
                .with_initial_text(encode_line_breaks(current))
                .allow_empty(true)
                .interact_text()?;
            Ok(decode_line_breaks(&input))
        }
    }
}

/// 取り込みを確定するか確認
pub fn confirm_import(rows: usize, columns: usize) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(format!(
            "Replace the app library with {} rows x {} columns?",
            rows, columns
        ))
        .default(false)
        .interact()?;
    Ok(confirmed)
}

fn encode_line_breaks(value: &str) -> String {
    value.replace('\n', "\\n")
}

fn decode_line_breaks(value: &str) -> String {
    value.replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_break_encoding() {
        let original = "first\nsecond";
        let encoded = encode_line_breaks(original);
        assert_eq!(encoded, "first\\nsecond");
        assert_eq!(decode_line_breaks(&encoded), original);
    }
}
