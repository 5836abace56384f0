use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while laying a fixture tree down on disk.
///
/// Every variant names the path that failed so a caller can tell how far the
/// build got before it aborted.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// The directory, file or link is already present.
    #[error("already exists: `{}`", path.display())]
    AlreadyExists {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Insufficient rights to create the entry.
    #[error("permission denied: `{}`", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The host platform or filesystem cannot create symbolic links.
    #[error("symbolic links are not supported here: `{}`", path.display())]
    Unsupported {
        path: PathBuf,
        #[source]
        source: Option<io::Error>,
    },

    /// Any other I/O failure (disk full, missing parent, ...).
    #[error("I/O error at `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The layout itself is inconsistent; raised before anything is created.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}

impl FixtureError {
    /// Classify an `io::Error` raised while working on `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::AlreadyExists => FixtureError::AlreadyExists { path, source },
            io::ErrorKind::PermissionDenied => FixtureError::PermissionDenied { path, source },
            io::ErrorKind::Unsupported => FixtureError::Unsupported {
                path,
                source: Some(source),
            },
            _ => FixtureError::Io { path, source },
        }
    }

    /// The path the failing operation was working on.
    pub fn path(&self) -> Option<&Path> {
        match self {
            FixtureError::AlreadyExists { path, .. }
            | FixtureError::PermissionDenied { path, .. }
            | FixtureError::Unsupported { path, .. }
            | FixtureError::Io { path, .. } => Some(path),
            FixtureError::InvalidLayout(_) => None,
        }
    }
}

/// Attach a path to a bare `io::Result`.
pub(crate) trait PathContext<T> {
    fn at(self, path: &Path) -> Result<T, FixtureError>;
}

impl<T> PathContext<T> for io::Result<T> {
    fn at(self, path: &Path) -> Result<T, FixtureError> {
        self.map_err(|e| FixtureError::from_io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_error_kind() {
        let p = Path::new("x/y");
        let e = FixtureError::from_io(p, io::Error::from(io::ErrorKind::AlreadyExists));
        assert!(matches!(e, FixtureError::AlreadyExists { .. }));
        assert_eq!(e.path(), Some(p));

        let e = FixtureError::from_io(p, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(e, FixtureError::PermissionDenied { .. }));

        let e = FixtureError::from_io(p, io::Error::from(io::ErrorKind::Unsupported));
        assert!(matches!(e, FixtureError::Unsupported { source: Some(_), .. }));

        let e = FixtureError::from_io(p, io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(e, FixtureError::Io { .. }));
    }

    #[test]
    fn display_names_the_path() {
        let e = FixtureError::from_io(
            Path::new("testbed/dir1"),
            io::Error::from(io::ErrorKind::AlreadyExists),
        );
        assert!(e.to_string().contains("testbed/dir1"));
    }
}
