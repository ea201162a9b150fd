//! Rolling Logger
//!
//! A `tracing` layer that keeps the most recent log lines in a circular
//! buffer and mirrors every line to the browser console (stderr off-wasm).
//! `log` records are bridged in by `tracing-subscriber` on init.

use std::collections::VecDeque;
use std::fmt::Write as _;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::Layer;

/// Target used by the plain-string helper below
const APP_TARGET: &str = "app";

static BUFFER: OnceLock<Arc<LogBuffer>> = OnceLock::new();

// ========================
// Circular Buffer
// ========================

/// Fixed-capacity buffer of formatted log lines (oldest evicted first)
#[derive(Debug)]
pub struct LogBuffer {
    lines: Mutex<VecDeque<String>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn push(&self, line: String) {
        let Ok(mut lines) = self.lines.lock() else { return };
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Snapshot of buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

// ========================
// Layer
// ========================

/// Layer that formats each event into one line, mirrors it and buffers it
pub struct RollingLayer {
    app_name: String,
    buffer: Arc<LogBuffer>,
}

impl RollingLayer {
    pub fn new(app_name: &str, buffer: Arc<LogBuffer>) -> Self {
        Self {
            app_name: app_name.to_string(),
            buffer,
        }
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let meta = event.metadata();
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(
            &timestamp,
            &self.app_name,
            meta.level(),
            meta.target(),
            &visitor.finish(),
        );

        emit(meta.level(), &line);
        self.buffer.push(line);
    }
}

/// Collects the `message` field plus any extra `key=value` fields
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.fields.trim_start().to_string()
        } else {
            format!("{}{}", self.message, self.fields)
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// `[time] [App] LEVEL target: message`
pub fn format_line(timestamp: &str, app_name: &str, level: &Level, target: &str, message: &str) -> String {
    format!("[{}] [{}] {:>5} {}: {}", timestamp, app_name, level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: &Level, line: &str) {
    let value = line.into();
    match *level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        _ => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: &Level, line: &str) {
    eprintln!("{}", line);
}

// ========================
// Public API
// ========================

/// Install the rolling layer as the global subscriber.
///
/// Debug builds keep `DEBUG` and above, release builds `INFO` and above.
pub fn init_logger(app_name: &str, capacity: usize) -> Result<(), TryInitError> {
    let buffer = Arc::new(LogBuffer::new(capacity));
    let max_level = if cfg!(debug_assertions) { LevelFilter::DEBUG } else { LevelFilter::INFO };

    tracing_subscriber::registry()
        .with(RollingLayer::new(app_name, buffer.clone()).with_filter(max_level))
        .try_init()?;

    let _ = BUFFER.set(buffer);
    Ok(())
}

/// Lines currently held by the global buffer (empty before init)
pub fn recent_lines() -> Vec<String> {
    BUFFER.get().map(|buffer| buffer.lines()).unwrap_or_default()
}

pub fn warn(message: &str) {
    tracing::warn!(target: APP_TARGET, "{}", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_evicts_oldest() {
        let buffer = LogBuffer::new(2);
        buffer.push("a".to_string());
        buffer.push("b".to_string());
        buffer.push("c".to_string());
        assert_eq!(buffer.lines(), vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let buffer = LogBuffer::new(0);
        buffer.push("only".to_string());
        buffer.push("latest".to_string());
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.lines(), vec!["latest".to_string()]);
    }

    #[test]
    fn test_format_line() {
        let line = format_line("12:00:00.000", "TodoUi", &Level::WARN, "todo_ui::store", "add failed");
        assert_eq!(line, "[12:00:00.000] [TodoUi]  WARN todo_ui::store: add failed");
    }

    #[test]
    fn test_layer_buffers_events_with_fields() {
        let buffer = Arc::new(LogBuffer::new(8));
        let subscriber = tracing_subscriber::registry().with(RollingLayer::new("Test", buffer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(count = 3, "loaded todos");
            tracing::warn!("delete failed");
        });

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[Test]"));
        assert!(lines[0].ends_with("loaded todos count=3"));
        assert!(lines[1].contains("WARN"));
        assert!(lines[1].ends_with("delete failed"));
    }

    #[test]
    fn test_recent_lines_after_init() {
        init_logger("Test", 4).unwrap();
        for n in 0..6 {
            warn(&format!("line {}", n));
        }

        let lines = recent_lines();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with("app: line 2"));
        assert!(lines[3].ends_with("app: line 5"));
    }
}
