//! Console and SD card logger.
//!
//! Implements the [`log`] facade, writing every record to the console and
//! to `nav_log.txt` in the root of the SD card. The waypoint controller logs
//! one `debug!` line per tick (pose, error and command), so a `Debug` level
//! log is enough to replay a movement after the match.
//!
//! # Usage
//!
//! ```ignore
//! use log::{LevelFilter, info};
//! use xnav::fs::logger;
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     logger::init(LevelFilter::Debug).expect("Logger init failed");
//!     info!("Program started");
//! }
//! ```
//!
//! # Log Output
//!
//! ```text
//! INFO [1m 4s 20ms] xnav::motion::waypoint - Settled after 281 ticks at Pose { .. }
//! WARN [1m 4s 40ms] xnav::motion::gps - Primary pose sensor degraded, using secondary
//! ```

use std::{
    fmt,
    fs::OpenOptions,
    io::{BufWriter, Write},
    sync::{Mutex, OnceLock},
    time::Duration,
};

use humantime::format_duration;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

/// File written by [`init`].
pub const LOG_FILE: &str = "nav_log.txt";

/// Writes log records to the console and a file.
pub struct NavLogger {
    /// `None` when the file could not be opened (no SD card).
    file_writer: Mutex<Option<BufWriter<std::fs::File>>>,
}

impl NavLogger {
    fn new(path: &str) -> Self {
        let file_writer = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .ok()
            .map(BufWriter::new);

        Self {
            file_writer: Mutex::new(file_writer),
        }
    }
}

impl log::Log for NavLogger {
    fn enabled(&self, metadata: &Metadata) -> bool { metadata.level() <= log::max_level() }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let log_line = format_line(record.level(), uptime(), record.target(), record.args());

            print!("{}", log_line);

            if let Ok(mut writer_guard) = self.file_writer.lock() {
                if let Some(ref mut writer) = *writer_guard {
                    let _ = writer.write_all(log_line.as_bytes());
                }
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut writer_guard) = self.file_writer.lock() {
            if let Some(ref mut writer) = *writer_guard {
                let _ = writer.flush();
            }
        }
    }
}

static LOGGER: OnceLock<NavLogger> = OnceLock::new();

/// Installs the logger as the global [`log`] backend.
///
/// Records below `level` are dropped. Call once at program start.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger has already been set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| NavLogger::new(LOG_FILE));
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

/// Formats one log line, newline included.
pub fn format_line(level: Level, elapsed: Duration, target: &str, args: impl fmt::Display) -> String {
    // whole milliseconds keep the line short
    let elapsed = Duration::from_millis(elapsed.as_millis() as u64);
    format!("{} [{}] {} - {}\n", level, format_duration(elapsed), target, args)
}

/// Time since the user program started.
#[cfg(target_os = "vexos")]
fn uptime() -> Duration { vexide::time::user_uptime() }

/// Time since the logger was first used.
#[cfg(not(target_os = "vexos"))]
fn uptime() -> Duration {
    static START: OnceLock<std::time::Instant> = OnceLock::new();
    START.get_or_init(std::time::Instant::now).elapsed()
}
