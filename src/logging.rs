//! Diagnostic logging facade.
//!
//! Configuration resolution reports what happened to the config file through
//! a [`Logger`]. The logger forwards each event to a [`LogSink`]:
//! - [`TracingSink`] writes to stderr/file via `tracing` (the default)
//! - [`MemorySink`] records events so callers can inspect them
//!
//! A shared [`LogLevelFilter`] drops events below a minimum level before they
//! reach the sink.

use serde::Serialize;
use serde_json::Value;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU8, Ordering},
};
use tracing::Level;

/// Severity of a diagnostic event, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn to_u8(self) -> u8 {
        match self {
            LogLevel::Debug => 0,
            LogLevel::Info => 1,
            LogLevel::Warning => 2,
            LogLevel::Error => 3,
        }
    }

    fn from_u8(val: u8) -> Self {
        match val {
            0 => LogLevel::Debug,
            1 => LogLevel::Info,
            2 => LogLevel::Warning,
            3 => LogLevel::Error,
            _ => LogLevel::Debug,
        }
    }
}

/// Convert a [`LogLevel`] to the matching tracing level.
pub fn log_level_to_tracing(level: LogLevel) -> Level {
    match level {
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warning => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

/// Atomic minimum-level filter shared between logger clones.
pub struct LogLevelFilter(AtomicU8);

impl LogLevelFilter {
    /// Create a new filter with the given minimum level.
    pub fn new(level: LogLevel) -> Self {
        Self(AtomicU8::new(level.to_u8()))
    }

    /// Get the current minimum level.
    pub fn get(&self) -> LogLevel {
        LogLevel::from_u8(self.0.load(Ordering::Relaxed))
    }

    /// Check if an event at the given level should be logged.
    pub fn should_log(&self, level: LogLevel) -> bool {
        level.to_u8() >= self.0.load(Ordering::Relaxed)
    }
}

impl Default for LogLevelFilter {
    fn default() -> Self {
        Self::new(LogLevel::Debug)
    }
}

/// A single diagnostic event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEvent {
    pub level: LogLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logger: Option<String>,
    pub message: String,
    /// Structured context, `Value::Null` when the event carries none.
    #[serde(skip_serializing_if = "Value::is_null")]
    pub context: Value,
}

/// Destination for diagnostic events.
pub trait LogSink: Send + Sync {
    fn emit(&self, event: &LogEvent);
}

/// Sink that forwards events to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, event: &LogEvent) {
        let logger = event.logger.as_deref().unwrap_or("");
        let message = event.message.as_str();
        let context = &event.context;
        match event.level {
            LogLevel::Error => tracing::error!(logger, %context, "{}", message),
            LogLevel::Warning => tracing::warn!(logger, %context, "{}", message),
            LogLevel::Info => tracing::info!(logger, %context, "{}", message),
            LogLevel::Debug => tracing::debug!(logger, %context, "{}", message),
        }
    }
}

/// Sink that keeps every event in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<LogEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<LogEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Events recorded at exactly `level`.
    pub fn events_at(&self, level: LogLevel) -> Vec<LogEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.level == level)
            .collect()
    }
}

impl LogSink for MemorySink {
    fn emit(&self, event: &LogEvent) {
        let mut events = match self.events.lock() {
            Ok(events) => events,
            Err(poisoned) => poisoned.into_inner(),
        };
        events.push(event.clone());
    }
}

/// Cloneable logger handle.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn LogSink>,
    /// Minimum level to log.
    level_filter: Arc<LogLevelFilter>,
    /// Logger name/category.
    name: Option<String>,
}

impl Logger {
    /// Create a logger that forwards to `tracing`.
    pub fn new() -> Self {
        Self {
            sink: Arc::new(TracingSink),
            level_filter: Arc::new(LogLevelFilter::default()),
            name: None,
        }
    }

    /// Replace the sink.
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Set the level filter.
    pub fn with_level_filter(mut self, filter: Arc<LogLevelFilter>) -> Self {
        self.level_filter = filter;
        self
    }

    /// Set the logger name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Emit an event if it passes the level filter.
    pub fn log(&self, level: LogLevel, message: &str, data: Option<Value>) {
        if !self.level_filter.should_log(level) {
            return;
        }

        let event = LogEvent {
            level,
            logger: self.name.clone(),
            message: message.to_string(),
            context: data.unwrap_or(Value::Null),
        };
        self.sink.emit(&event);
    }

    /// Log a message with structured data.
    pub fn log_with_data(&self, level: LogLevel, message: &str, data: Value) {
        self.log(level, message, Some(data));
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level_filter.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn memory_logger() -> (Logger, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::new().with_sink(sink.clone()).with_name("test");
        (logger, sink)
    }

    #[test]
    fn test_level_filter() {
        let filter = LogLevelFilter::new(LogLevel::Warning);

        assert!(!filter.should_log(LogLevel::Debug));
        assert!(!filter.should_log(LogLevel::Info));

        assert!(filter.should_log(LogLevel::Warning));
        assert!(filter.should_log(LogLevel::Error));
    }

    #[test]
    fn test_level_filter_get() {
        for level in [
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warning,
            LogLevel::Error,
        ] {
            assert_eq!(LogLevelFilter::new(level).get(), level);
        }
    }

    #[test]
    fn test_log_level_to_tracing() {
        assert_eq!(log_level_to_tracing(LogLevel::Debug), Level::DEBUG);
        assert_eq!(log_level_to_tracing(LogLevel::Info), Level::INFO);
        assert_eq!(log_level_to_tracing(LogLevel::Warning), Level::WARN);
        assert_eq!(log_level_to_tracing(LogLevel::Error), Level::ERROR);
    }

    #[test]
    fn test_memory_sink_records_events_with_context() {
        let (logger, sink) = memory_logger();
        logger.log_with_data(LogLevel::Warning, "something odd", json!({"path": "a.json"}));
        logger.log(LogLevel::Debug, "detail", None);

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].level, LogLevel::Warning);
        assert_eq!(events[0].logger.as_deref(), Some("test"));
        assert_eq!(events[0].context, json!({"path": "a.json"}));
        assert_eq!(events[1].context, Value::Null);
        assert_eq!(sink.events_at(LogLevel::Debug).len(), 1);
    }

    #[test]
    fn test_filtered_events_never_reach_sink() {
        let (logger, sink) = memory_logger();
        let logger = logger.with_level_filter(Arc::new(LogLevelFilter::new(LogLevel::Warning)));

        logger.log(LogLevel::Debug, "hidden", None);
        logger.log(LogLevel::Info, "hidden", None);
        logger.log(LogLevel::Error, "shown", None);

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].message, "shown");
    }

    #[test]
    fn test_clones_share_sink() {
        let (logger, sink) = memory_logger();
        let other = logger.clone();
        logger.log(LogLevel::Info, "one", None);
        other.log(LogLevel::Info, "two", None);
        assert_eq!(sink.events().len(), 2);
    }
}
