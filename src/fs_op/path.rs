//! Path normalisation for comparing user-supplied paths.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Make `p` absolute against the current directory, drop `.` components and
/// fold `..` lexically, then canonicalize the deepest ancestor that exists.
///
/// The path itself does not need to exist, so a root that is about to be
/// created and a file inside it resolve to comparable paths.
pub fn resolve_path(p: &Path) -> io::Result<PathBuf> {
    let abs = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    let mut lexical = PathBuf::new();
    for c in abs.components() {
        match c {
            Component::CurDir => {}
            Component::ParentDir => {
                lexical.pop();
            }
            other => lexical.push(other.as_os_str()),
        }
    }

    let mut existing = lexical.as_path();
    let mut rest: Vec<OsString> = Vec::new();
    loop {
        if let Ok(mut out) = fs::canonicalize(existing) {
            for part in rest.iter().rev() {
                out.push(part);
            }
            return Ok(out);
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                rest.push(name.to_os_string());
                existing = parent;
            }
            _ => return Ok(lexical),
        }
    }
}

/// Whether `inner` lies at or below `outer` once both are resolved.
pub fn is_within(outer: &Path, inner: &Path) -> io::Result<bool> {
    Ok(resolve_path(inner)?.starts_with(resolve_path(outer)?))
}
