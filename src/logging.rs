// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Leveled driver logging.
//!
//! Driver log entries are gated by an enable flag. When enabled, an entry is
//! formatted as `"<level>: <source> - <message>"`, handed to a generic sink
//! supplied by the host, and then forwarded to a severity-specific
//! [`LevelChannel`]. The default channel is [`TracingChannel`], which emits
//! the entry through `tracing`.
//!
//! The configuration is an explicit [`LogConfig`] value held by every
//! component that logs (device, transport, protocol) instead of ambient
//! global state.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use lift_tile::logging::{LogConfig, LogLevel};
//!
//! let lines = Arc::new(Mutex::new(Vec::new()));
//! let sink_lines = lines.clone();
//!
//! let log = LogConfig::enabled().with_sink(move |line| sink_lines.lock().push(line.to_string()));
//! log.log(LogLevel::Debug, "Connect", "Connect");
//!
//! assert_eq!(lines.lock().as_slice(), ["Debug: Connect - Connect"]);
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Severity of a driver log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    /// Forwarded to the error channel.
    Error,
    /// Forwarded to the warning channel.
    Warning,
    /// Forwarded to the notice channel.
    Debug,
    /// Reaches the sink only; no channel receives it.
    Info,
}

impl LogLevel {
    /// Returns the level name used in formatted entries.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Debug => "Debug",
            Self::Info => "Info",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single driver log entry.
///
/// Records are ephemeral: they are formatted, forwarded and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord<'a> {
    /// Entry severity.
    pub level: LogLevel,
    /// The operation that produced the entry (e.g. `"DoCommand"`).
    pub source: &'a str,
    /// Free-form message.
    pub message: &'a str,
}

impl fmt::Display for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.level, self.source, self.message)
    }
}

/// Severity-specific destination for formatted log entries.
pub trait LevelChannel: Send + Sync {
    /// Receives entries logged at [`LogLevel::Error`].
    fn error(&self, line: &str);

    /// Receives entries logged at [`LogLevel::Warning`].
    fn warn(&self, line: &str);

    /// Receives entries logged at [`LogLevel::Debug`].
    fn notice(&self, line: &str);
}

/// Level channel backed by `tracing`.
///
/// Notices are emitted at `INFO`, since `tracing` has no notice level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingChannel;

impl LevelChannel for TracingChannel {
    fn error(&self, line: &str) {
        tracing::error!(target: "lift_tile", "{line}");
    }

    fn warn(&self, line: &str) {
        tracing::warn!(target: "lift_tile", "{line}");
    }

    fn notice(&self, line: &str) {
        tracing::info!(target: "lift_tile", "{line}");
    }
}

/// Generic sink receiving every formatted entry.
pub type LogSink = Arc<dyn Fn(&str) + Send + Sync>;

/// Writes one driver log entry.
///
/// When `enabled` is `false` nothing is formatted and neither `sink` nor
/// `channel` is called. Otherwise the formatted line goes to `sink`, then to
/// the channel matching `level`. [`LogLevel::Info`] has no channel.
pub fn log(
    enabled: bool,
    sink: &dyn Fn(&str),
    channel: &dyn LevelChannel,
    level: LogLevel,
    source: &str,
    message: &str,
) {
    if !enabled {
        return;
    }

    let line = LogRecord {
        level,
        source,
        message,
    }
    .to_string();

    sink(&line);

    match level {
        LogLevel::Error => channel.error(&line),
        LogLevel::Warning => channel.warn(&line),
        LogLevel::Debug => channel.notice(&line),
        LogLevel::Info => {}
    }
}

/// Logging configuration shared by the device and its connection objects.
///
/// Cloning is cheap: the sink and channel are reference counted.
#[derive(Clone)]
pub struct LogConfig {
    enabled: bool,
    sink: Option<LogSink>,
    channel: Arc<dyn LevelChannel>,
}

impl LogConfig {
    /// Creates a disabled configuration with no sink and the tracing channel.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            sink: None,
            channel: Arc::new(TracingChannel),
        }
    }

    /// Creates an enabled configuration with no sink and the tracing channel.
    #[must_use]
    pub fn enabled() -> Self {
        Self::disabled().with_enabled(true)
    }

    /// Sets the enable flag.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the generic sink.
    #[must_use]
    pub fn with_sink<F>(mut self, sink: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Replaces the level channel.
    #[must_use]
    pub fn with_channel<C>(mut self, channel: C) -> Self
    where
        C: LevelChannel + 'static,
    {
        self.channel = Arc::new(channel);
        self
    }

    /// Returns `true` if entries are written.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Writes an entry at the given level.
    pub fn log(&self, level: LogLevel, source: &str, message: &str) {
        let channel = self.channel.as_ref();
        match &self.sink {
            Some(sink) => log(self.enabled, sink.as_ref(), channel, level, source, message),
            None => log(self.enabled, &|_: &str| {}, channel, level, source, message),
        }
    }

    /// Writes a [`LogLevel::Debug`] entry.
    pub fn debug(&self, source: &str, message: &str) {
        self.log(LogLevel::Debug, source, message);
    }

    /// Writes a [`LogLevel::Warning`] entry.
    pub fn warning(&self, source: &str, message: &str) {
        self.log(LogLevel::Warning, source, message);
    }

    /// Writes a [`LogLevel::Error`] entry.
    pub fn error(&self, source: &str, message: &str) {
        self.log(LogLevel::Error, source, message);
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::disabled()
    }
}

impl fmt::Debug for LogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogConfig")
            .field("enabled", &self.enabled)
            .field("has_sink", &self.sink.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Channel recording `(channel, line)` pairs.
    #[derive(Debug, Default, Clone)]
    pub(crate) struct RecordingChannel {
        pub(crate) lines: Arc<Mutex<Vec<(&'static str, String)>>>,
    }

    impl LevelChannel for RecordingChannel {
        fn error(&self, line: &str) {
            self.lines.lock().push(("error", line.to_string()));
        }

        fn warn(&self, line: &str) {
            self.lines.lock().push(("warn", line.to_string()));
        }

        fn notice(&self, line: &str) {
            self.lines.lock().push(("notice", line.to_string()));
        }
    }

    const ALL_LEVELS: [LogLevel; 4] = [
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Debug,
        LogLevel::Info,
    ];

    #[test]
    fn record_format() {
        let record = LogRecord {
            level: LogLevel::Debug,
            source: "DoCommand",
            message: "Button1Command",
        };
        assert_eq!(record.to_string(), "Debug: DoCommand - Button1Command");
    }

    #[test]
    fn record_format_empty_message() {
        let record = LogRecord {
            level: LogLevel::Debug,
            source: "CreateDeviceDefinition",
            message: "",
        };
        assert_eq!(record.to_string(), "Debug: CreateDeviceDefinition - ");
    }

    #[test]
    fn disabled_logger_never_calls_sink_or_channel() {
        let channel = RecordingChannel::default();
        let sink_calls = Mutex::new(0_u32);

        for level in ALL_LEVELS {
            log(
                false,
                &|_: &str| *sink_calls.lock() += 1,
                &channel,
                level,
                "Source",
                "message",
            );
        }

        assert_eq!(*sink_calls.lock(), 0);
        assert!(channel.lines.lock().is_empty());
    }

    #[test]
    fn levels_route_to_matching_channel() {
        let channel = RecordingChannel::default();
        let sink_lines = Mutex::new(Vec::new());

        for level in ALL_LEVELS {
            log(
                true,
                &|line: &str| sink_lines.lock().push(line.to_string()),
                &channel,
                level,
                "Src",
                "msg",
            );
        }

        assert_eq!(
            sink_lines.lock().as_slice(),
            [
                "Error: Src - msg",
                "Warning: Src - msg",
                "Debug: Src - msg",
                "Info: Src - msg",
            ]
        );
        assert_eq!(
            channel.lines.lock().as_slice(),
            [
                ("error", "Error: Src - msg".to_string()),
                ("warn", "Warning: Src - msg".to_string()),
                ("notice", "Debug: Src - msg".to_string()),
            ]
        );
    }

    #[test]
    fn config_without_sink_still_reaches_channel() {
        let channel = RecordingChannel::default();
        let config = LogConfig::enabled().with_channel(channel.clone());

        config.warning("Connect", "late");

        assert_eq!(
            channel.lines.lock().as_slice(),
            [("warn", "Warning: Connect - late".to_string())]
        );
    }

    #[test]
    fn config_disabled_by_default() {
        let channel = RecordingChannel::default();
        let config = LogConfig::default().with_channel(channel.clone());

        config.error("Initialize", "boom");

        assert!(!config.is_enabled());
        assert!(channel.lines.lock().is_empty());
    }

    #[test]
    fn config_clone_shares_sink() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink_lines = lines.clone();
        let config = LogConfig::enabled()
            .with_channel(RecordingChannel::default())
            .with_sink(move |line| sink_lines.lock().push(line.to_string()));

        let copy = config.clone();
        config.debug("A", "1");
        copy.debug("B", "2");

        assert_eq!(lines.lock().len(), 2);
    }

    #[test]
    fn config_debug_hides_closures() {
        let debug = format!("{:?}", LogConfig::enabled().with_sink(|_| {}));
        assert!(debug.contains("enabled: true"));
        assert!(debug.contains("has_sink: true"));
    }
}
