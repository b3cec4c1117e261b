//! File resolution
//!
//! Maps a decoded request path onto a regular file under the root directory
//! and reads it fresh on every call.

use crate::error::ServeError;
use crate::http::mime;
use crate::logger;
use std::path::{Path, PathBuf};
use tokio::fs;

/// A file read for one request
#[derive(Debug)]
pub struct ResolvedFile {
    pub path: PathBuf,
    pub content: Vec<u8>,
    pub content_type: Option<&'static str>,
}

/// Resolves request paths against a root directory
#[derive(Debug, Clone)]
pub struct FileResolver {
    root: PathBuf,
    sandbox: bool,
}

impl FileResolver {
    pub fn new(root: impl Into<PathBuf>, sandbox: bool) -> Self {
        Self {
            root: root.into(),
            sandbox,
        }
    }

    /// Read the regular file at `path` (relative to root)
    ///
    /// Without sandboxing, `..` segments are joined as-is and may leave the root.
    pub async fn resolve(&self, path: &str) -> Result<ResolvedFile, ServeError> {
        let relative = path.trim_start_matches('/');
        let file_path = self.root.join(relative);

        if self.sandbox && !self.is_inside_root(&file_path).await {
            logger::log_warning(&format!("Path traversal attempt blocked: {path}"));
            return Err(ServeError::NotFound);
        }

        match fs::metadata(&file_path).await {
            Ok(meta) if meta.is_file() => {}
            _ => return Err(ServeError::NotFound),
        }

        // the file may vanish or be unreadable after the metadata check
        let content = fs::read(&file_path).await.map_err(ServeError::Filesystem)?;
        let content_type = mime::for_path(&file_path);

        Ok(ResolvedFile {
            path: file_path,
            content,
            content_type,
        })
    }

    async fn is_inside_root(&self, file_path: &Path) -> bool {
        let Ok(root) = fs::canonicalize(&self.root).await else {
            logger::log_warning(&format!(
                "Root directory not found or inaccessible '{}'",
                self.root.display()
            ));
            return false;
        };
        // nonexistent targets are a 404 either way
        fs::canonicalize(file_path)
            .await
            .is_ok_and(|canonical| canonical.starts_with(&root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("site/js")).unwrap();
        std::fs::write(dir.path().join("site/index.html"), "<h1>hi</h1>").unwrap();
        std::fs::write(dir.path().join("site/js/app.js"), "let a = 1;").unwrap();
        std::fs::write(dir.path().join("site/data.unknownext"), [0u8, 1, 2]).unwrap();
        std::fs::write(dir.path().join("secret.txt"), "outside").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_resolve_existing_file() {
        let dir = setup();
        let resolver = FileResolver::new(dir.path().join("site"), false);

        let file = resolver.resolve("/index.html").await.unwrap();
        assert_eq!(file.content, b"<h1>hi</h1>");
        assert_eq!(file.content_type, Some("text/html"));

        let file = resolver.resolve("/js/app.js").await.unwrap();
        assert_eq!(file.content, b"let a = 1;");
        assert_eq!(file.content_type, Some("text/javascript"));

        let file = resolver.resolve("/data.unknownext").await.unwrap();
        assert_eq!(file.content, vec![0u8, 1, 2]);
        assert_eq!(file.content_type, None);
    }

    #[tokio::test]
    async fn test_missing_and_directory_are_not_found() {
        let dir = setup();
        let resolver = FileResolver::new(dir.path().join("site"), false);

        assert!(matches!(
            resolver.resolve("/nope.html").await,
            Err(ServeError::NotFound)
        ));
        assert!(matches!(
            resolver.resolve("/js").await,
            Err(ServeError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_traversal_unguarded_by_default() {
        let dir = setup();
        let resolver = FileResolver::new(dir.path().join("site"), false);

        let file = resolver.resolve("/../secret.txt").await.unwrap();
        assert_eq!(file.content, b"outside");
    }

    #[tokio::test]
    async fn test_sandbox_blocks_traversal() {
        let dir = setup();
        let resolver = FileResolver::new(dir.path().join("site"), true);

        assert!(matches!(
            resolver.resolve("/../secret.txt").await,
            Err(ServeError::NotFound)
        ));
        assert!(resolver.resolve("/js/app.js").await.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_unreadable_file_is_filesystem_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = setup();
        let locked = dir.path().join("site/locked.html");
        std::fs::write(&locked, "<p>locked</p>").unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

        // root ignores file modes
        if std::fs::read(&locked).is_ok() {
            return;
        }

        let resolver = FileResolver::new(dir.path().join("site"), false);
        let err = resolver.resolve("/locked.html").await.unwrap_err();
        assert!(matches!(err, ServeError::Filesystem(_)));
        assert_eq!(err.status(), hyper::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
