//! Input retrieval
//!
//! The pipeline does not care where bytes come from. Implementations of
//! [`ByteSource`] map their transport failures onto [`SvError::Fetch`] with
//! an HTTP-status-like code and a diagnostic body, so downstream handling
//! is identical for a filesystem miss and a remote 404.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::SvError;

/// Trait for retrieving a file's raw bytes by relative path.
///
/// Implementations might include:
/// - DirSource for a local data directory
/// - in-memory fixtures for testing
pub trait ByteSource {
    /// Fetch the raw bytes for `path`.
    fn fetch(&self, path: &str) -> Result<Vec<u8>, SvError>;
}

/// Byte source rooted at a local directory.
///
/// Paths are interpreted relative to the root; absolute paths and parent
/// traversal are rejected so a caller-supplied path cannot escape it.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The configured root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, SvError> {
        let relative = Path::new(path);
        let escapes = relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, Component::ParentDir));
        if escapes {
            return Err(SvError::Fetch {
                status: 400,
                body: format!("invalid path: {}", path),
            });
        }
        Ok(self.root.join(relative))
    }
}

impl ByteSource for DirSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, SvError> {
        let resolved = self.resolve(path)?;
        fs::read(&resolved).map_err(|e| {
            let status = if e.kind() == std::io::ErrorKind::NotFound {
                404
            } else {
                500
            };
            SvError::Fetch {
                status,
                body: format!("{}: {}", path, e),
            }
        })
    }
}
