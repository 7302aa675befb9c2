//! Logger setup for the `iban` binary.
//!
//! Diagnostics go to stderr so stdout carries only command output. A dated
//! log file is added when `IBAN_LOG_DIR` names a directory.

use std::path::PathBuf;
use std::sync::Once;

use chrono::Local;

static INIT: Once = Once::new();

/// Logger settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: log::LevelFilter,
    pub file_dir: Option<PathBuf>,
}

impl LogConfig {
    /// Resolve settings through `var`, normally [`std::env::var`].
    ///
    /// Level: `IBAN_LOG_LEVEL`, then `RUST_LOG`, then `warn`. Unparseable
    /// levels fall back to `warn`. `IBAN_LOG_DIR` unset, empty, `off` or
    /// `none` disables the log file.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let level = var("IBAN_LOG_LEVEL")
            .or_else(|| var("RUST_LOG"))
            .and_then(|raw| raw.trim().parse::<log::LevelFilter>().ok())
            .unwrap_or(log::LevelFilter::Warn);

        let file_dir = var("IBAN_LOG_DIR")
            .map(|raw| raw.trim().to_string())
            .filter(|dir| !matches!(dir.to_ascii_lowercase().as_str(), "" | "off" | "none"))
            .map(PathBuf::from);

        Self { level, file_dir }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Path of today's log file for `app_name`, if file logging is on.
    pub fn log_file_path(&self, app_name: &str) -> Option<PathBuf> {
        let date = Local::now().format("%Y_%m_%d");
        self.file_dir
            .as_ref()
            .map(|dir| dir.join(format!("{app_name}-{date}.log")))
    }
}

/// Install the global logger once; later calls are no-ops.
pub fn init_logging(app_name: &str) -> Result<(), String> {
    let mut init_result = Ok(());
    INIT.call_once(|| init_result = install(&LogConfig::from_env(), app_name));
    init_result
}

fn install(config: &LogConfig, app_name: &str) -> Result<(), String> {
    let mut dispatch = fern::Dispatch::new()
        .level(config.level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} | {:<5} | {} | {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    if let (Some(dir), Some(path)) = (&config.file_dir, config.log_file_path(app_name)) {
        std::fs::create_dir_all(dir).map_err(|err| format!("log dir {}: {err}", dir.display()))?;
        let file = fern::log_file(&path).map_err(|err| format!("log file {}: {err}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    dispatch.apply().map_err(|err| err.to_string())
}
