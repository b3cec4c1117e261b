//! Request-level error type.
//!
//! Every failure a handler can hit maps to exactly one HTTP status. Errors
//! never outlive the request that produced them.

use hyper::{Method, StatusCode};
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ServeError {
    /// Requested path is not a readable regular file
    NotFound,
    /// Non-GET request on the proxy route
    MethodNotAllowed(Method),
    /// Proxy request carried no `url` query parameter
    MissingUrl,
    /// Outbound fetch could not be completed
    Upstream(reqwest::Error),
    /// File existed but could not be read
    Filesystem(io::Error),
}

impl ServeError {
    /// HTTP status reported to the client
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::BAD_REQUEST,
            Self::MissingUrl | Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Filesystem(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Server-side failures, as opposed to client mistakes
    pub fn is_server_error(&self) -> bool {
        self.status().is_server_error()
    }
}

impl fmt::Display for ServeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::MethodNotAllowed(method) => write!(f, "method not allowed: {method}"),
            Self::MissingUrl => write!(f, "upstream fetch failed: missing `url` query parameter"),
            Self::Upstream(e) => write!(f, "upstream fetch failed: {e}"),
            Self::Filesystem(e) => write!(f, "filesystem: {e}"),
        }
    }
}

impl std::error::Error for ServeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Upstream(e) => Some(e),
            Self::Filesystem(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ServeError {
    fn from(e: reqwest::Error) -> Self {
        Self::Upstream(e)
    }
}
