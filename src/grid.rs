//! 端末向けの表形式表示

use app_library_common::Table;

const ELLIPSIS: char = '…';

/// セルを幅に収める（改行は空白に置き換え）
fn fit(value: &str, width: usize) -> String {
    let flat: String = value
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    let len = flat.chars().count();
    if len <= width {
        format!("{}{}", flat, " ".repeat(width - len))
    } else if width == 0 {
        String::new()
    } else {
        let mut cut: String = flat.chars().take(width - 1).collect();
        cut.push(ELLIPSIS);
        cut
    }
}

/// テーブルを文字列に整形
///
/// 各列の幅は内容に合わせ、`max_width` で頭打ちにする。
pub fn render(table: &Table, max_width: usize) -> String {
    let columns = table.columns();
    if columns.is_empty() {
        return String::new();
    }

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            table
                .rows()
                .iter()
                .map(|row| row[idx].chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
                .clamp(1, max_width.max(1))
        })
        .collect();

    let format_line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| fit(cell, w))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&format_line(columns));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in table.rows() {
        out.push_str(&format_line(row.as_slice()));
        out.push('\n');
    }
    out
}

/// 1レコードを縦に表示（列名: 値）
pub fn render_row(table: &Table, index: usize) -> Option<String> {
    let row = table.row(index)?;
    let label_width = table
        .columns()
        .iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (name, value) in table.columns().iter().zip(row) {
        let pad = label_width - name.chars().count();
        out.push_str(&format!("{}{} : {}\n", name, " ".repeat(pad), value));
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_truncates() {
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("a\nb", 3), "a b");
    }

    #[test]
    fn test_render_header_and_rows() {
        let table = Table::from_parts(
            vec!["Name".into(), "Cost".into()],
            vec![vec!["Widget".into(), "10".into()]],
        )
        .unwrap();
        let text = render(&table, 20);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Name   | Cost");
        assert_eq!(lines[1], "-------+-----");
        assert_eq!(lines[2], "Widget | 10");
    }

    #[test]
    fn test_render_row() {
        let table = Table::default_sample();
        let text = render_row(&table, 0).unwrap();
        assert!(text.contains("App Name"));
        assert!(text.contains("Invoice Tracker + Reminder Tool"));
        assert!(render_row(&table, 1).is_none());
    }
}
