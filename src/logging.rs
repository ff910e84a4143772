use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;

use anyhow::Result;
use chrono::Local;
use log::{LevelFilter, Metadata, Record};

/// Appends log records to a file. The terminal belongs to the UI, so
/// nothing is written to stdout or stderr.
pub struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
}

impl FileLogger {
    pub fn open(path: &Path, level: LevelFilter) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
            level,
        })
    }

    /// Install as the global logger. A level of `Off` installs nothing.
    pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
        if level == LevelFilter::Off {
            return Ok(());
        }
        let logger = Self::open(path, level)?;
        log::set_boxed_logger(Box::new(logger))?;
        log::set_max_level(level);
        Ok(())
    }

    fn format(record: &Record) -> String {
        format!(
            "{} {:<5} {}: {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = Self::format(record);
        if let Ok(mut file) = self.file.lock() {
            let _ = file.write_all(line.as_bytes());
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

pub fn parse_level(name: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(name.trim()).ok()
}

pub fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lettr")
        .join("lettr.log")
}

#[cfg(test)]
mod tests {
    use log::{Level, Log};

    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level("WARN"), Some(LevelFilter::Warn));
        assert_eq!(parse_level(" off "), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_writes_enabled_records_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("lettr.log");
        let logger = FileLogger::open(&path, LevelFilter::Info).unwrap();

        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("lettr::session")
                .args(format_args!("round 3 answered"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .target("lettr::session")
                .args(format_args!("hidden"))
                .build(),
        );
        logger.flush();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("INFO  lettr::session: round 3 answered"));
        assert!(!content.contains("hidden"));
        assert_eq!(content.lines().count(), 1);
    }
}
