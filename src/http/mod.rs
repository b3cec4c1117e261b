//! HTTP protocol layer module
//!
//! Content-type lookup, request-target decoding, and response builders shared
//! by the static file and proxy handlers.

pub mod mime;
pub mod request;
pub mod response;

pub use request::{decode_path, query_param};
pub use response::{
    build_error_response, build_file_response, build_redirect_response, build_relay_response,
};
