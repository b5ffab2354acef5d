use app_library::{cli, config, error, export, form, grid, importer, logging, session, store};
use app_library_common::schema::{self, FILTER_COLUMNS};
use app_library_common::{AppRecord, Filter};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::{AppLibraryError, Result};
use importer::ImportPayload;
use session::Session;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use store::TableStore;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn open_session(config: &Config) -> Result<Session> {
    Session::open(TableStore::from_config(config))
}

/// 下書きJSONを読み込む
fn load_draft(path: &Path) -> Result<AppRecord> {
    if !path.is_file() {
        return Err(AppLibraryError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 再読み込み後のテーブルの最終行から App Name を報告
fn print_saved(session: &Session) {
    let table = session.table();
    let app_name = table
        .len()
        .checked_sub(1)
        .and_then(|last| table.value(last, schema::APP_NAME))
        .unwrap_or_default();
    println!("✔ New entry '{}' saved to {}", app_name, session.store().path().display());
}

fn run(cli: Cli) -> Result<()> {
    let stored = Config::load()?;
    let config = stored.clone().with_overrides(cli.data_dir, cli.table_file);

    match cli.command {
        Commands::List { app_type, ai_used, show } => {
            let session = open_session(&config)?;
            let label = format!("{}: {}, {}: {}", FILTER_COLUMNS[0], app_type, FILTER_COLUMNS[1], ai_used);
            let filter = Filter::app_type_and_ai_used(app_type, ai_used);
            let view = session.filtered(&filter);

            println!("📚 App Library ({} of {} rows) [{}]\n", view.len(), session.table().len(), label);

            match show {
                Some(n) => match n.checked_sub(1).and_then(|i| grid::render_row(&view, i)) {
                    Some(text) => print!("{}", text),
                    None => println!("No row {} in the current view", n),
                },
                None => print!("{}", grid::render(&view, config.cell_width)),
            }
        }

        Commands::Choices => {
            let session = open_session(&config)?;
            for column in FILTER_COLUMNS {
                println!("{}: {}", column, session.choices(column).join(" | "));
            }
        }

        Commands::Add { fields, from, interactive } => {
            let mut session = open_session(&config)?;

            let draft = match from {
                Some(path) => load_draft(&path)?,
                None => AppRecord::default(),
            };
            let mut record = fields.apply_to(draft);

            if interactive {
                println!("➕ Add New App Entry\n");
                // 検証エラーの間は入力済みの値を残してフォームを開き直す
                loop {
                    record = form::prompt_record(&record)?;
                    match session.append(&record) {
                        Ok(_) => break,
                        Err(e) if e.is_recoverable() => eprintln!("✖ {}\n", e),
                        Err(e) => return Err(e),
                    }
                }
            } else {
                session.append(&record)?;
            }

            print_saved(&session);
        }

        Commands::Import { file, yes, dry_run, preview_rows } => {
            let mut session = open_session(&config)?;
            let source = file.display().to_string();

            let (rows, columns) = {
                let pending = match importer::read_import_file(&file)? {
                    ImportPayload::Csv(bytes) => session.stage_import(&bytes, &source)?,
                    ImportPayload::Table(table) => session.stage_table(table, &source),
                };

                println!("📥 Preview: {}", pending.summary());
                println!("  columns: {}", pending.table.columns().join(", "));
                if !schema::is_canonical(pending.table.columns()) {
                    println!("  ⚠ columns differ from the app library schema");
                }
                println!();
                print!("{}", grid::render(&pending.table.head(preview_rows), config.cell_width));
                println!();

                (pending.table.len(), pending.table.columns().len())
            };

            if dry_run {
                session.discard_import();
                println!("Dry run: nothing saved");
                return Ok(());
            }

            if yes || form::confirm_import(rows, columns)? {
                let count = session.confirm_import()?;
                println!("✔ Imported {} rows into {}", count, session.store().path().display());
            } else {
                session.discard_import();
                println!("Import cancelled: {} unchanged", session.store().path().display());
            }
        }

        Commands::Export { output, format } => {
            let session = open_session(&config)?;
            let output = output.unwrap_or_else(|| PathBuf::from("."));

            let path = export::export_table(session.table(), &format, &output, &config.export_file_name)?;
            println!("✔ Exported {} rows ({}): {}", session.table().len(), format, path.display());
        }

        Commands::Config { set_data_dir, show } => {
            // 保存済みの設定だけを扱う（--data-dir / --file はこの回限り）
            let config_path = Config::config_path()?;
            let mut stored = stored;

            if let Some(dir) = set_data_dir {
                stored = Config::set_data_dir(&config_path, dir)?;
                println!("✔ Data directory set");
            }

            if show {
                println!("Config: {}", config_path.display());
                println!("  data_dir: {}", stored.data_dir.display());
                println!("  file_name: {}", stored.file_name);
                println!("  export_file_name: {}", stored.export_file_name);
                println!("  cell_width: {}", stored.cell_width);
                println!("  table: {}", stored.table_path().display());
            }
        }
    }

    Ok(())
}
