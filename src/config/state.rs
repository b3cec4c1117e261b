// Application state module
// Everything a request handler needs, built once from the config record

use super::types::Config;
use crate::handler::resolver::FileResolver;
use crate::upstream::UpstreamClient;

/// Application state, shared read-only across connections
pub struct AppState {
    pub config: Config,
    pub files: FileResolver,
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            config: config.clone(),
            files: FileResolver::new(&config.files.root, config.files.sandbox),
            upstream: UpstreamClient::new(config.proxy.use_env_proxy)?,
        })
    }
}
