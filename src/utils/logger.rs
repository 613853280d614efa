use lazy_static::lazy_static;
use std::any::Any;
use std::backtrace::Backtrace;
use std::fs::OpenOptions;
use std::io::Write;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::shared::constants;

#[derive(Clone)]
struct LoggerPaths {
    error_path: PathBuf,
    debug_path: PathBuf,
}

lazy_static! {
    static ref LOGGER: Mutex<Option<LoggerPaths>> = Mutex::new(None);
}

fn append_line(path: &Path, line: &str) {
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(file, "{}", line);
    }
}

fn start_log(path: &Path, title: &str) {
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
    {
        let _ = writeln!(file, "=== {} Log Started: {} ===", title, chrono::Local::now());
    }
}

/// Truncate both log files and route panics into them.
///
/// Relative paths resolve against the working directory.
pub fn init(error_log: &Path, debug_log: &Path) {
    let cwd = std::env::current_dir().unwrap_or_default();
    let paths = LoggerPaths {
        error_path: cwd.join(error_log),
        debug_path: cwd.join(debug_log),
    };

    start_log(&paths.error_path, "Error");
    start_log(&paths.debug_path, "Debug");

    if let Ok(mut logger) = LOGGER.lock() {
        *logger = Some(paths.clone());
    }

    panic::set_hook(Box::new(move |info| {
        let report = panic_report(
            panic_message(info.payload()),
            info.location().map(|l| (l.file(), l.line())),
            &Backtrace::capture().to_string(),
        );

        append_line(&paths.error_path, &report);
        append_line(&paths.debug_path, &report);

        eprintln!(
            "{} aborted on an internal error; details in {}",
            constants::APP_NAME,
            paths.error_path.display()
        );
    }));
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}

/// One `[time][PANIC]` line, followed by the backtrace when one was captured.
fn panic_report(message: &str, location: Option<(&str, u32)>, backtrace: &str) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let mut report = match location {
        Some((file, line)) => format!("[{}][PANIC] {} ({}:{})", timestamp, message, file, line),
        None => format!("[{}][PANIC] {}", timestamp, message),
    };
    let backtrace = backtrace.trim();
    if !backtrace.is_empty() && !backtrace.starts_with("disabled backtrace") {
        report.push('\n');
        report.push_str(backtrace);
    }
    report
}

pub fn log(level: &str, msg: &str) {
    let Ok(logger) = LOGGER.lock() else {
        return;
    };
    if let Some(paths) = logger.as_ref() {
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
        let line = format!("[{}][{}] {}", timestamp, level, msg);
        append_line(&paths.debug_path, &line);

        if level == "ERROR" {
            append_line(&paths.error_path, &line);
        }
    }
}

pub fn info(msg: &str) {
    log("INFO", msg);
}

pub fn error(msg: &str) {
    log("ERROR", msg);
}

pub fn debug(msg: &str) {
    log("DEBUG", msg);
}
