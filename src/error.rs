use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors surfaced to callers of the analyzers.
///
/// Anything that goes wrong *inside* a phase is logged and swallowed; only an
/// unusable root reaches the caller.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("cannot traverse {path}: {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type ScanResult<T> = Result<T, ScanError>;

/// Check that `root` exists and is a readable directory.
pub fn ensure_root(root: &std::path::Path) -> ScanResult<()> {
    let meta = std::fs::metadata(root).map_err(|_| ScanError::PathNotFound(root.to_path_buf()))?;
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_ensure_root() {
        let dir = TempDir::new().unwrap();
        assert!(ensure_root(dir.path()).is_ok());

        let file = NamedTempFile::new().unwrap();
        assert!(matches!(ensure_root(file.path()), Err(ScanError::NotADirectory(_))));

        let missing = dir.path().join("gone");
        assert!(matches!(ensure_root(&missing), Err(ScanError::PathNotFound(p)) if p == missing));
    }
}
