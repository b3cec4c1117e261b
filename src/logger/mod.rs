//! Logger module
//!
//! Provides logging utilities for the dev server including:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Level-filtered diagnostics (error, warn, info, debug)
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::{Config, LogLevel};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU8, Ordering};

/// Active diagnostic level, `Info` until `init` runs
static LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    LEVEL.store(config.logging.level as u8, Ordering::Relaxed);
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn enabled(level: LogLevel) -> bool {
    level as u8 <= LEVEL.load(Ordering::Relaxed)
}

/// Write to info log
fn write_info(message: &str) {
    if writer::is_initialized() {
        writer::get().write_info(message);
    } else {
        println!("{message}");
    }
}

/// Write to error log
fn write_error(message: &str) {
    if writer::is_initialized() {
        writer::get().write_error(message);
    } else {
        eprintln!("{message}");
    }
}

/// Write to access log specifically
fn write_access(message: &str) {
    if writer::is_initialized() {
        writer::get().write_access(message);
    } else {
        println!("{message}");
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("Dev server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Serving files from: {}", config.files.root));
    write_info(&format!("Fetch proxy: {}?url=<target>", config.proxy.path));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if config.files.sandbox {
        write_info("Path sandbox: enabled");
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================\n");
}

pub fn log_info(message: &str) {
    if enabled(LogLevel::Info) {
        write_info(&format!("[INFO] {message}"));
    }
}

pub fn log_debug(message: &str) {
    if enabled(LogLevel::Debug) {
        write_info(&format!("[DEBUG] {message}"));
    }
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    if enabled(LogLevel::Warn) {
        write_error(&format!("[WARN] {message}"));
    }
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}

pub fn log_file_served(path: &std::path::Path, content_type: Option<&str>) {
    log_info(&format!(
        "[Static] {} (content type: {})",
        path.display(),
        content_type.unwrap_or("unknown")
    ));
}

pub fn log_fetched(url: &str, size: usize) {
    log_info(&format!("[Proxy] Fetched {url}: {size} bytes"));
}

pub fn log_browser_opened(url: &str) {
    log_info(&format!("Running on {url}. A browser window should open."));
}

pub fn log_bind_retry(addr: &SocketAddr, err: &std::io::Error) {
    log_warning(&format!(
        "Port {} seems to be occupied ({err}), trying a different one...",
        addr.port()
    ));
}
