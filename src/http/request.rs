//! Request-target decoding
//!
//! Percent-decodes paths and pulls single parameters out of query strings.

use percent_encoding::percent_decode_str;

/// Percent-decode a request path, `None` when the result is not UTF-8
pub fn decode_path(path: &str) -> Option<String> {
    percent_decode_str(path)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}

/// First value of `name` in a form-urlencoded query string
pub fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
