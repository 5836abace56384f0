//! Plain-text listing of a built fixture tree.
//!
//! One line per entry, `<kind>\t<size>\t<relative path>`:
//! - `d` directories, size `-`
//! - `f` regular files, size in bytes
//! - `l` symbolic links, the raw link target in place of a size
//!
//! Links are listed, never followed, so the cycle in the standard tree is
//! harmless here.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use walkdir::WalkDir;

use crate::fs_op::error::{FixtureError, PathContext};

fn walk_error(root: &Path, e: walkdir::Error) -> FixtureError {
    let path = e.path().unwrap_or(root).to_path_buf();
    let source = e
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("filesystem loop"));
    FixtureError::from_io(&path, source)
}

/// Render the manifest for everything below `root` (the root itself is not
/// listed). Entries come out depth-first, sorted by file name.
pub fn render_manifest(root: &Path) -> Result<String, FixtureError> {
    let mut out = String::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        let path = entry.path();
        let rel = path
            .strip_prefix(root)
            .unwrap_or(path)
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        let ft = entry.file_type();
        let line = if ft.is_symlink() {
            let target = std::fs::read_link(path).at(path)?;
            format!("l\t{}\t{}", target.to_string_lossy(), rel)
        } else if ft.is_dir() {
            format!("d\t-\t{}", rel)
        } else {
            let len = entry.metadata().map_err(|e| walk_error(root, e))?.len();
            format!("f\t{}\t{}", len, rel)
        };
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

/// Write the manifest for `root` to a new file at `out`.
///
/// `out` is created fresh; an existing file is an `AlreadyExists` error.
/// Returns the number of entries listed.
pub fn write_manifest(root: &Path, out: &Path) -> Result<usize, FixtureError> {
    let text = render_manifest(root)?;
    let mut f = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(out)
        .at(out)?;
    f.write_all(text.as_bytes()).at(out)?;
    Ok(text.lines().count())
}
