//! Logging infrastructure for stagehand.
//!
//! Provides a thread-safe logging sink with optional file output and a
//! bounded in-memory tail. The tail exists so the in-game debug console
//! can replay recent entries without reading the log file back.
//!
//! The sink is embedded in a host game: an uninitialized or unwritable
//! sink silently drops entries instead of panicking.

use chrono::Local;
use std::collections::VecDeque;
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Level name as it appears in log lines and configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

/// One recorded log entry.
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Monotonic sequence number, unique for the sink's lifetime
    pub seq: u64,
    /// Timestamp in HH:MM:SS format
    pub timestamp: String,
    /// Entry severity
    pub level: LogLevel,
    /// Message text
    pub message: String,
}

/// Global sink state.
#[derive(Debug)]
struct Sink {
    /// Recent entries, oldest first
    ring: VecDeque<LogEntry>,
    /// Maximum number of entries kept in memory
    capacity: usize,
    /// Entries below this level are dropped
    min_level: LogLevel,
    /// Log file path; None disables file output
    file_path: Option<PathBuf>,
    /// Next sequence number
    next_seq: u64,
}

impl Sink {
    fn new(file_path: Option<PathBuf>, capacity: usize, min_level: LogLevel) -> Self {
        // Truncate the previous run's file so the log maps to one session
        if let Some(path) = &file_path {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Ok(mut file) = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)
            {
                let _ = writeln!(file, "=== stagehand log start ===");
            }
        }

        Self {
            ring: VecDeque::new(),
            capacity,
            min_level,
            file_path,
            next_seq: 0,
        }
    }

    fn record(&mut self, level: LogLevel, message: String) {
        if level < self.min_level {
            return;
        }

        let timestamp = Local::now().format("%H:%M:%S").to_string();
        if let Some(path) = &self.file_path {
            // Recreate the file if it was deleted mid-session
            if let Ok(mut file) = OpenOptions::new().append(true).create(true).open(path) {
                let _ = writeln!(file, "[{}] {}: {}", timestamp, level.as_str(), message);
            }
        }

        self.ring.push_back(LogEntry {
            seq: self.next_seq,
            timestamp,
            level,
            message,
        });
        self.next_seq += 1;

        while self.ring.len() > self.capacity {
            self.ring.pop_front();
        }
    }

    fn tail(&self, count: usize) -> Vec<LogEntry> {
        let skip = self.ring.len().saturating_sub(count);
        self.ring.iter().skip(skip).cloned().collect()
    }
}

/// Global sink instance that persists for the application lifetime.
static SINK: OnceLock<Mutex<Sink>> = OnceLock::new();

fn with_sink(f: impl FnOnce(&mut Sink)) {
    if let Some(sink) = SINK.get() {
        if let Ok(mut sink) = sink.lock() {
            f(&mut sink);
        }
    }
}

/// Initialize the global sink.
///
/// Call once at startup before anything logs. Later calls are ignored.
/// Entries recorded before initialization are dropped.
///
/// # Arguments
///
/// * `file_path` - Log file path; `None` keeps entries in memory only
/// * `capacity` - Maximum number of entries retained for [`tail`]
/// * `min_level` - Minimum level to record
pub fn init(file_path: Option<PathBuf>, capacity: usize, min_level: LogLevel) {
    SINK.get_or_init(|| Mutex::new(Sink::new(file_path, capacity, min_level)));
}

/// Record an entry at an explicit level.
pub fn log(level: LogLevel, message: impl Into<String>) {
    with_sink(|sink| sink.record(level, message.into()));
}

/// Log a debug message
pub fn debug(message: impl Into<String>) {
    log(LogLevel::Debug, message);
}

/// Log an informational message
pub fn info(message: impl Into<String>) {
    log(LogLevel::Info, message);
}

/// Log a warning
pub fn warn(message: impl Into<String>) {
    log(LogLevel::Warn, message);
}

/// Log an error
pub fn error(message: impl Into<String>) {
    log(LogLevel::Error, message);
}

/// Last `count` entries, oldest first.
///
/// The debug console panel renders this directly.
pub fn tail(count: usize) -> Vec<LogEntry> {
    let mut entries = Vec::new();
    with_sink(|sink| entries = sink.tail(count));
    entries
}

/// Drop all in-memory entries. File output is unaffected.
pub fn clear() {
    with_sink(|sink| sink.ring.clear());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_level_parsing() {
        assert_eq!(LogLevel::from_str("debug"), Ok(LogLevel::Debug));
        assert_eq!(LogLevel::from_str("WARNING"), Ok(LogLevel::Warn));
        assert_eq!(LogLevel::from_str("Error"), Ok(LogLevel::Error));
        assert!(LogLevel::from_str("chatty").is_err());
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    // The sink is a process-wide singleton, so everything that depends on
    // init() lives in one test.
    #[test]
    fn test_sink_records_filters_and_trims() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        init(Some(path.clone()), 4, LogLevel::Info);

        debug("below threshold");
        for i in 0..6 {
            info(format!("entry {}", i));
        }

        let entries = tail(10);
        assert_eq!(entries.len(), 4, "ring should trim to capacity");
        assert_eq!(entries[0].message, "entry 2");
        assert_eq!(entries[3].message, "entry 5");
        assert!(entries[0].seq < entries[3].seq);
        assert!(entries.iter().all(|e| e.level == LogLevel::Info));

        let file = std::fs::read_to_string(&path).unwrap();
        assert!(file.contains("entry 0"), "file keeps trimmed entries");
        assert!(!file.contains("below threshold"));

        clear();
        assert!(tail(10).is_empty());
        error("after clear");
        assert_eq!(tail(10).len(), 1);
    }
}
