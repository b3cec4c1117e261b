// Configuration module entry point
// Loads the layered configuration record handed to the server at startup

mod state;
mod types;

use std::net::SocketAddr;

pub use state::AppState;
pub use types::{Config, FilesConfig, LogLevel, LoggingConfig, ProxyConfig, ServerConfig};

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "devserve";

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Missing file is fine, defaults and `DEVSERVE_*` variables still apply
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("DEVSERVE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8181)?
            .set_default("server.auto_open", false)?
            .set_default("server.debug", true)?
            .set_default("server.port_retries", 0)?
            .set_default("server.keep_alive", true)?
            .set_default("files.root", ".")?
            .set_default("files.index_path", "/index.html")?
            .set_default("files.sandbox", false)?
            .set_default("proxy.path", "/proxy")?
            .set_default("proxy.use_env_proxy", true)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
