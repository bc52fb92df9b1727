use std::fmt;
use std::sync::Arc;

/// Severity passed to a [`LogSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Info,
    Warn,
    Note,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Note => "note",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied observer for hydration decisions.
pub type LogSink = Arc<dyn Fn(LogLevel, &str) + Send + Sync>;

/// Routes each event to `tracing` and, when present, to the caller's sink.
pub(crate) struct EventLog<'a> {
    sink: Option<&'a LogSink>,
}

impl<'a> EventLog<'a> {
    pub(crate) fn new(sink: Option<&'a LogSink>) -> Self {
        Self { sink }
    }

    pub(crate) fn emit(&self, level: LogLevel, message: String) {
        match level {
            LogLevel::Info => tracing::info!("{}", message),
            LogLevel::Warn => tracing::warn!("{}", message),
            LogLevel::Note => tracing::debug!(note = true, "{}", message),
        }
        if let Some(sink) = self.sink {
            sink(level, &message);
        }
    }
}
