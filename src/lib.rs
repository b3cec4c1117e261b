//! devserve: local development HTTP server
//!
//! Serves static files from a root directory and relays `GET /proxy?url=...`
//! fetches so a browser front end can reach cross-origin resources.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
pub mod upstream;
