//! Small utilities for working with symbolic links.
//!
//! Fixture links are always relative and are never resolved while being
//! created. Platforms that cannot create them report
//! [`FixtureError::Unsupported`] instead of skipping the link.

use std::io;
use std::path::{Path, PathBuf};

use crate::fs_op::error::{FixtureError, PathContext};

/// Whether this build of the crate knows how to create symbolic links at all.
///
/// On Windows this is only the compile-time answer; creating a link can still
/// fail without the symlink privilege, which is reported as `Unsupported`.
pub const fn symlinks_supported() -> bool {
    cfg!(any(unix, windows))
}

/// Create a symbolic link at `link` whose raw target string is `target`.
///
/// - On Unix this delegates to `std::os::unix::fs::symlink`.
/// - On Windows the link is created with `symlink_dir`, since fixture links
///   point at directories. A missing privilege maps to `Unsupported`.
/// - Elsewhere nothing is touched and `Unsupported` is returned.
pub fn create_symlink(target: &Path, link: &Path) -> Result<(), FixtureError> {
    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(target, link).at(link)
    }

    #[cfg(windows)]
    {
        // ERROR_PRIVILEGE_NOT_HELD
        const PRIVILEGE_NOT_HELD: i32 = 1314;
        std::os::windows::fs::symlink_dir(target, link).map_err(|e| {
            if e.raw_os_error() == Some(PRIVILEGE_NOT_HELD) {
                FixtureError::Unsupported {
                    path: link.to_path_buf(),
                    source: Some(e),
                }
            } else {
                FixtureError::from_io(link, e)
            }
        })
    }

    #[cfg(not(any(unix, windows)))]
    {
        let _ = target;
        Err(FixtureError::Unsupported {
            path: link.to_path_buf(),
            source: None,
        })
    }
}

/// Returns `true` when `path` itself is a symbolic link.
///
/// This checks the *link* metadata (does not follow the link).
pub fn is_symlink(path: &Path) -> io::Result<bool> {
    Ok(path.symlink_metadata()?.file_type().is_symlink())
}

/// Read the raw target of a symbolic link without resolving it.
pub fn read_symlink(path: &Path) -> io::Result<PathBuf> {
    path.read_link()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    // Windows symlink creation often requires developer privileges and should
    // be tested separately on Windows hosts.
    #[cfg(unix)]
    #[test]
    fn creates_dangling_relative_link() -> io::Result<()> {
        let tmp = tempdir()?;
        let link = tmp.path().join("nowhere");
        create_symlink(Path::new("../does/not/exist"), &link).unwrap();
        assert!(is_symlink(&link)?);
        assert_eq!(read_symlink(&link)?, PathBuf::from("../does/not/exist"));
        assert!(!link.exists());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn link_onto_existing_path_is_already_exists() -> io::Result<()> {
        let tmp = tempdir()?;
        let link = tmp.path().join("taken");
        fs::create_dir(&link)?;
        let err = create_symlink(Path::new(".."), &link).unwrap_err();
        assert!(matches!(err, FixtureError::AlreadyExists { .. }));
        assert!(!is_symlink(&link)?);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn unix_supports_symlinks() {
        assert!(symlinks_supported());
    }
}
