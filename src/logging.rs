use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::OnceLock;

// Console logger with optional per-topic debug filtering
#[derive(Debug)]
struct PhysicsLogger {
    level: LevelFilter,
    debug_filters: Option<HashSet<String>>,
}

/// Pulls the id out of an "Entity N" mention, if any.
fn entity_id(message: &str) -> Option<usize> {
    let start = message.find("Entity ")? + "Entity ".len();
    let digits: &str = {
        let rest = &message[start..];
        let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        &rest[..end]
    };
    digits.parse().ok()
}

fn format_record(record: &Record) -> String {
    let level_color = match record.level() {
        log::Level::Error => "\x1B[31m", // Red
        log::Level::Warn => "\x1B[33m",  // Yellow
        log::Level::Info => "\x1B[32m",  // Green
        log::Level::Debug => "\x1B[36m", // Cyan
        log::Level::Trace => "\x1B[35m", // Magenta
    };
    let reset = "\x1B[0m";
    let timestamp = Local::now().format("%H:%M:%S%.3f");

    let message = record.args().to_string();
    let context = match entity_id(&message) {
        Some(id) => format!("[E{:02}] ", id),
        None => String::new(),
    };

    format!(
        "{timestamp} {level_color}{level:5}{reset} {context}{target}: {message}",
        level = record.level(),
        target = record.target(),
    )
}

impl log::Log for PhysicsLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        if let Some(filters) = &self.debug_filters {
            if metadata.level() >= log::Level::Debug {
                return filters.iter().any(|f| metadata.target().starts_with(f.as_str()));
            }
        }
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut stdout = io::stdout().lock();
            let _ = writeln!(stdout, "{}", format_record(record));
            let _ = stdout.flush();
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

static LOGGER: OnceLock<PhysicsLogger> = OnceLock::new();

/// Parses a log level name, falling back to `Info`.
pub fn parse_level(name: &str) -> LevelFilter {
    match name.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

fn parse_filters(filter_str: &str) -> HashSet<String> {
    filter_str
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

// Initialize the logger with optional debug filters
pub fn init_logger(level: LevelFilter, debug_filter: Option<String>) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| PhysicsLogger {
        level,
        debug_filters: debug_filter.as_deref().map(parse_filters),
    });
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

// Helper macros for specific debug topics
#[macro_export]
macro_rules! debug_report {
    ($($arg:tt)*) => {
        log::debug!(target: "report", "{}", format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_world {
    ($frame:expr, $($arg:tt)*) => {
        log::debug!(target: "world", "[F{:05}] {}", $frame, format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn test_entity_id_extraction() {
        assert_eq!(entity_id("Entity 7 has hit the ground at 12.5."), Some(7));
        assert_eq!(entity_id("Entity 12"), Some(12));
        assert_eq!(entity_id("File data: Range 1"), None);
        assert_eq!(entity_id("Entity x"), None);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), LevelFilter::Debug);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("bogus"), LevelFilter::Info);
    }

    #[test]
    fn test_debug_filter_limits_topics() {
        let logger = PhysicsLogger {
            level: LevelFilter::Trace,
            debug_filters: Some(parse_filters("world, report")),
        };
        let debug_world = Metadata::builder().level(log::Level::Debug).target("world").build();
        let debug_render = Metadata::builder().level(log::Level::Debug).target("render").build();
        let info_render = Metadata::builder().level(log::Level::Info).target("render").build();
        assert!(logger.enabled(&debug_world));
        assert!(!logger.enabled(&debug_render));
        assert!(logger.enabled(&info_render));
    }

    #[test]
    fn test_level_threshold() {
        let logger = PhysicsLogger {
            level: LevelFilter::Warn,
            debug_filters: None,
        };
        let info = Metadata::builder().level(log::Level::Info).target("world").build();
        let error = Metadata::builder().level(log::Level::Error).target("world").build();
        assert!(!logger.enabled(&info));
        assert!(logger.enabled(&error));
    }
}
