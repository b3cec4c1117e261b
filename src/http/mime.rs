//! MIME type detection module
//!
//! Best-effort Content-Type lookup by file extension. Unknown extensions
//! yield `None` so the response goes out without a Content-Type header and
//! the browser sniffs it.

use std::path::Path;

/// Get MIME Content-Type based on file extension (case-insensitive)
///
/// # Examples
/// ```
/// use devserve::http::mime::get_content_type;
/// assert_eq!(get_content_type(Some("html")), Some("text/html"));
/// assert_eq!(get_content_type(Some("sf2")), Some("audio/x-soundfont"));
/// assert_eq!(get_content_type(Some("xyz")), None);
/// ```
pub fn get_content_type(extension: Option<&str>) -> Option<&'static str> {
    let ext = extension?.to_ascii_lowercase();
    let content_type = match ext.as_str() {
        // Text
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "xml" => "application/xml",

        // JavaScript/WASM
        "js" | "mjs" => "text/javascript",
        "json" | "map" => "application/json",
        "wasm" => "application/wasm",

        // Images
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/vnd.microsoft.icon",
        "webp" => "image/webp",
        "bmp" => "image/bmp",

        // Video
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "ogv" => "video/ogg",
        "mov" => "video/quicktime",

        // Audio
        "mp3" => "audio/mpeg",
        "wav" => "audio/x-wav",
        "ogg" | "oga" => "audio/ogg",
        "flac" => "audio/flac",
        "m4a" => "audio/mp4",
        "mid" | "midi" | "rmi" => "audio/midi",
        "sf2" | "sf3" => "audio/x-soundfont",
        "dls" => "audio/dls",

        // Fonts
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",

        // Documents
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "tar" => "application/x-tar",

        _ => return None,
    };
    Some(content_type)
}

/// Content-Type for a filesystem path
pub fn for_path(path: &Path) -> Option<&'static str> {
    get_content_type(path.extension().and_then(|e| e.to_str()))
}
