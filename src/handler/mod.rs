//! Request handler module
//!
//! Routes each request to the static file handler or the fetch proxy.

pub mod proxy;
pub mod resolver;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
