//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log entries
//! and forwards them to a bounded buffer the log panel reads from.

use crate::error::{AppError, AppResult};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum number of lines kept for the log panel.
///
pub const MAX_LOG_ENTRIES: usize = 500;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Shared, bounded store of formatted log lines. Oldest lines are dropped
/// first once the capacity is reached.
///
#[derive(Clone, Debug)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl Default for LogBuffer {
    fn default() -> Self {
        LogBuffer::with_capacity(MAX_LOG_ENTRIES)
    }
}

impl LogBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        LogBuffer {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn push(&self, line: String) {
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() == self.capacity {
                entries.pop_front();
            }
            entries.push_back(line);
        }
    }

    /// Return a snapshot of the buffered lines, oldest first.
    ///
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Custom logger that captures logs through a callback
///
pub struct CustomLogger {
    level: LevelFilter,
    log_callback: Arc<Mutex<Option<Box<dyn Fn(String) + Send + Sync>>>>,
}

impl CustomLogger {
    pub fn new(level: LevelFilter) -> Self {
        CustomLogger {
            level,
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_log_callback(&self, callback: Box<dyn Fn(String) + Send + Sync>) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(callback) = self.log_callback.lock() {
                if let Some(ref cb) = *callback {
                    cb(format_log(record));
                }
            }
        }
    }

    fn flush(&self) {}
}

/// Install a `CustomLogger` as the global logger, forwarding every record at
/// or above `level` into the returned buffer.
///
pub fn init(level: LevelFilter) -> AppResult<LogBuffer> {
    let buffer = LogBuffer::default();
    let logger = CustomLogger::new(level);
    let sink = buffer.clone();
    logger.set_log_callback(Box::new(move |line| sink.push(line)));
    log::set_boxed_logger(Box::new(logger)).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at(level: Level, logger: &CustomLogger) {
        logger.log(
            &Record::builder()
                .args(format_args!("widget toggled"))
                .level(level)
                .target("widget_dash")
                .build(),
        );
    }

    #[test]
    fn test_format_log_contains_level_and_message() {
        let line = format_log(
            &Record::builder()
                .args(format_args!("hello"))
                .level(Level::Warn)
                .build(),
        );
        assert!(line.contains("WARN hello"));
    }

    #[test]
    fn test_logger_forwards_to_callback() {
        let buffer = LogBuffer::default();
        let logger = CustomLogger::new(LevelFilter::Debug);
        let sink = buffer.clone();
        logger.set_log_callback(Box::new(move |line| sink.push(line)));

        record_at(Level::Debug, &logger);
        record_at(Level::Trace, &logger);

        let entries = buffer.entries();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].contains("DEBUG widget toggled"));
    }

    #[test]
    fn test_logger_without_callback_is_silent() {
        let logger = CustomLogger::new(LevelFilter::Trace);
        record_at(Level::Info, &logger);
    }

    #[test]
    fn test_buffer_drops_oldest() {
        let buffer = LogBuffer::with_capacity(2);
        assert!(buffer.is_empty());
        buffer.push("one".to_string());
        buffer.push("two".to_string());
        buffer.push("three".to_string());
        assert_eq!(buffer.entries(), vec!["two".to_string(), "three".to_string()]);
    }
}
