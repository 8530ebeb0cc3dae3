use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    sink: Mutex<File>,
}

impl Logger {
    fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            sink: Mutex::new(file),
        })
    }

    pub fn log(&self, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        if let Ok(mut sink) = self.sink.lock() {
            let _ = writeln!(sink, "[{}] {}", timestamp, message);
        }
    }
}

pub fn init_logger(path: &Path) -> std::io::Result<()> {
    match Logger::open(path) {
        Ok(logger) => {
            let _ = LOGGER.set(logger);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

// A no-op until init_logger is called.
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
