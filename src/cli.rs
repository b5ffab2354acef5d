use app_library_common::{AppRecord, Predicate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "app-library")]
#[command(about = "App Library - アプリ台帳の登録・絞り込み・CSV入出力", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 台帳CSVのディレクトリ（設定ファイルより優先）
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// 台帳CSVのファイル名（設定ファイルより優先）
    #[arg(long = "file", global = true)]
    pub table_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 台帳を一覧表示（App Type / AI Used? で絞り込み）
    List {
        /// App Type（"All" で制約なし）
        #[arg(long, default_value = "All")]
        app_type: Predicate,

        /// AI Used?（"All" で制約なし）
        #[arg(long, default_value = "All")]
        ai_used: Predicate,

        /// 絞り込み結果のN番目（1始まり）を縦に表示
        #[arg(long)]
        show: Option<usize>,
    },

    /// 絞り込みの選択肢を表示
    Choices,

    /// レコードを1件追加
    Add {
        #[command(flatten)]
        fields: RecordArgs,

        /// 下書きJSONファイル（列名をキーにしたオブジェクト）
        #[arg(long)]
        from: Option<PathBuf>,

        /// 対話式フォームで入力
        #[arg(short, long)]
        interactive: bool,
    },

    /// CSV/表計算ファイルで台帳を置き換え
    Import {
        /// 取り込むファイル
        #[arg(required = true)]
        file: PathBuf,

        /// 確認なしで確定
        #[arg(short, long)]
        yes: bool,

        /// プレビューのみ（保存しない）
        #[arg(long)]
        dry_run: bool,

        /// プレビューに表示する行数
        #[arg(long, default_value = "5")]
        preview_rows: usize,
    },

    /// 台帳全体を書き出し
    Export {
        /// 出力ファイル/ディレクトリ（既定: カレント/app_library.csv）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (csv/xlsx)
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,
    },

    /// 設定を表示/編集
    Config {
        /// 台帳ディレクトリを設定
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// レコードの各項目（未指定は空）
#[derive(Args, Debug, Default)]
pub struct RecordArgs {
    #[arg(long)]
    pub app_name: Option<String>,
    #[arg(long)]
    pub problem: Option<String>,
    #[arg(long)]
    pub submitted_by: Option<String>,
    #[arg(long)]
    pub app_type: Option<String>,
    #[arg(long)]
    pub tech_stack: Option<String>,
    #[arg(long)]
    pub ai_used: Option<String>,
    #[arg(long)]
    pub user_inputs: Option<String>,
    #[arg(long)]
    pub core_outputs: Option<String>,
    #[arg(long)]
    pub automations: Option<String>,
    #[arg(long)]
    pub video_link: Option<String>,
    #[arg(long)]
    pub code_link: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl RecordArgs {
    /// 指定された項目だけ `base` に上書き
    pub fn apply_to(self, base: AppRecord) -> AppRecord {
        AppRecord {
            app_name: self.app_name.unwrap_or(base.app_name),
            problem_it_solves: self.problem.unwrap_or(base.problem_it_solves),
            submitted_by: self.submitted_by.unwrap_or(base.submitted_by),
            app_type: self.app_type.unwrap_or(base.app_type),
            tech_stack: self.tech_stack.unwrap_or(base.tech_stack),
            ai_used: self.ai_used.unwrap_or(base.ai_used),
            user_inputs: self.user_inputs.unwrap_or(base.user_inputs),
            core_outputs: self.core_outputs.unwrap_or(base.core_outputs),
            automations: self.automations.unwrap_or(base.automations),
            video_tutorial_link: self.video_link.unwrap_or(base.video_tutorial_link),
            code_link: self.code_link.unwrap_or(base.code_link),
            notes: self.notes.unwrap_or(base.notes),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
}

impl ExportFormat {
    /// 出力ファイルの拡張子
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            _ => Err(format!("Unknown format: {}. Use csv or xlsx", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_filters() {
        let cli = Cli::parse_from(["app-library", "list", "--app-type", "Internal tool"]);
        match cli.command {
            Commands::List { app_type, ai_used, show } => {
                assert_eq!(app_type, Predicate::Exact("Internal tool".into()));
                assert_eq!(ai_used, Predicate::Any);
                assert!(show.is_none());
            }
            _ => panic!("listとして解析されていない"),
        }
    }

    #[test]
    fn test_record_args_override() {
        let cli = Cli::parse_from([
            "app-library",
            "add",
            "--app-name",
            "Quote Builder",
            "--ai-used",
            "No",
        ]);
        let Commands::Add { fields, .. } = cli.command else {
            panic!("addとして解析されていない");
        };
        let record = fields.apply_to(AppRecord {
            notes: "draft".into(),
            ..Default::default()
        });
        assert_eq!(record.app_name, "Quote Builder");
        assert_eq!(record.ai_used, "No");
        assert_eq!(record.notes, "draft");
    }

    #[test]
    fn test_export_format_parse() {
        assert!(matches!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv)));
        assert!(matches!("excel".parse::<ExportFormat>(), Ok(ExportFormat::Xlsx)));
        assert!("pdf".parse::<ExportFormat>().is_err());
    }
}
