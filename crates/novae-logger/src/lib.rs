use owo_colors::{OwoColorize, Stream};
use std::sync::OnceLock;

pub struct Logger {
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Warning,
    Error,
    Debug,
}

impl LogLevel {
    const fn stream(self) -> Stream {
        match self {
            Self::Warning | Self::Error => Stream::Stderr,
            Self::Debug => Stream::Stdout,
        }
    }
}

impl Logger {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    #[must_use]
    pub const fn should_emit(&self, level: LogLevel) -> bool {
        !self.quiet || matches!(level, LogLevel::Error)
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.should_emit(level) {
            return;
        }

        let stream = level.stream();
        let (prefix, colored_message) = match level {
            LogLevel::Warning => (
                "⚠".if_supports_color(stream, |t| t.bright_yellow().bold().to_string())
                    .to_string(),
                message
                    .if_supports_color(stream, |t| t.bright_yellow().to_string())
                    .to_string(),
            ),
            LogLevel::Error => (
                "✗".if_supports_color(stream, |t| t.bright_red().bold().to_string())
                    .to_string(),
                message
                    .if_supports_color(stream, |t| t.bright_red().to_string())
                    .to_string(),
            ),
            LogLevel::Debug => (
                "•".if_supports_color(stream, |t| t.bright_black().bold().to_string())
                    .to_string(),
                message
                    .if_supports_color(stream, |t| t.bright_black().to_string())
                    .to_string(),
            ),
        };

        match stream {
            Stream::Stderr => eprintln!("{prefix} {colored_message}"),
            _ => println!("{prefix} {colored_message}"),
        }
    }

    /// Prints a bare confirmation line, silenced in quiet mode.
    pub fn confirm(&self, message: &str) {
        if self.quiet {
            return;
        }
        println!("{message}");
    }

    /// Prints a usage problem to stderr without a prefix, colored only on a
    /// terminal, so scripts see the message verbatim.
    pub fn usage(&self, message: &str) {
        eprintln!(
            "{}",
            message.if_supports_color(Stream::Stderr, |t| t.bright_red().to_string())
        );
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    pub fn debug(&self, message: &str, debug_enabled: bool) {
        if debug_enabled {
            self.log(LogLevel::Debug, message);
        }
    }
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub fn init_logger(quiet: bool) {
    let _ = LOGGER.set(Logger::new(quiet));
}

fn get_logger() -> &'static Logger {
    LOGGER.get_or_init(|| Logger::new(false))
}

pub fn confirm(message: &str) {
    get_logger().confirm(message);
}

pub fn usage(message: &str) {
    get_logger().usage(message);
}

pub fn warn(message: &str) {
    get_logger().warn(message);
}

pub fn error(message: &str) {
    get_logger().error(message);
}

pub fn debug(message: &str, debug_enabled: bool) {
    get_logger().debug(message, debug_enabled);
}
