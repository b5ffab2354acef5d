use tracing_subscriber::{fmt, EnvFilter};

/// ログ出力先は標準エラー。`APP_LIBRARY_LOG` があればそれを優先
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = EnvFilter::try_from_env("APP_LIBRARY_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
