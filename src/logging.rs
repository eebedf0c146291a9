use std::path::{Path, PathBuf};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system.
///
/// Logs go to stderr in compact form; `RUST_LOG` overrides the level chosen
/// by the `verbose` flag. When `log_file` is given, structured JSON logs are
/// additionally appended to that file.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("folio={default_level}")));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    match log_file {
        Some(path) => {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            let _ = std::fs::create_dir_all(dir);
            let file_name = path
                .file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new("folio.log"));

            let appender = tracing_appender::rolling::never(dir, file_name);
            let file_layer = fmt::layer().with_writer(appender).with_ansi(false).json();
            subscriber.with(file_layer).init();
        }
        None => subscriber.init(),
    }
}
