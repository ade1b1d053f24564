use anyhow::{Context, Result};
use chrono::Local;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};

/// Oldest entries are dropped past this many lines
const MAX_BUFFERED_LOGS: usize = 500;

static FILE_LOGGING: OnceCell<PathBuf> = OnceCell::new();

/// Shared logger that can be used across the application
///
/// Entries are kept in memory for the logs dialog and forwarded to the `log`
/// facade, which writes them to disk when file logging is enabled.
#[derive(Clone, Debug)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    enabled: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: false,
        }
    }

    /// Build a logger from the `logging.enabled` setting
    pub fn from_config(enabled: bool) -> Result<Self> {
        if enabled {
            init_file_logging()?;
        }
        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        log::info!(target: "clinids", "{}", message);
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_BUFFERED_LOGS {
                logs.remove(0);
            }
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Location of the log file written when logging is enabled
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Route `log` records to the log file. Safe to call more than once.
fn init_file_logging() -> Result<()> {
    FILE_LOGGING.get_or_try_init(|| -> Result<PathBuf> {
        let path = Logger::get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(log::LevelFilter::Info)
            .chain(
                fern::log_file(&path)
                    .with_context(|| format!("Failed to open log file: {}", path.display()))?,
            )
            .apply()
            .context("Failed to install file logger")?;

        Ok(path)
    })?;
    Ok(())
}
