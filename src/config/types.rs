// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub files: FilesConfig,
    pub proxy: ProxyConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    /// Open the system browser at the root URL once listening
    pub auto_open: bool,
    /// Put error details into 5xx response bodies
    pub debug: bool,
    /// How many following ports to try when the configured one is taken
    pub port_retries: u16,
    pub keep_alive: bool,
}

/// Static file configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FilesConfig {
    /// Directory request paths are resolved against
    pub root: String,
    /// Redirect target for `/`
    pub index_path: String,
    /// Reject paths that escape `root`
    pub sandbox: bool,
}

/// Fetch proxy configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ProxyConfig {
    pub path: String,
    /// Route outbound fetches through `HTTP_PROXY`/`HTTPS_PROXY` when set
    pub use_env_proxy: bool,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Diagnostic verbosity, ordered from quietest to loudest
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
        }
    }
}
