use std::sync::OnceLock;

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Process-wide event log. Writes to stderr so the board rendering on
/// stdout stays parseable by a test harness.
pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn log(&self, message: &str) {
        let timestamp = Local::now().format("%H:%M:%S");
        match self.prefix {
            Some(ref prefix) => eprintln!("[{}][{}] {}", timestamp, prefix, message),
            None => eprintln!("[{}] {}", timestamp, message),
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

/// Silently drops messages until `init_logger` runs, so library tests
/// never have to set up logging.
pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
