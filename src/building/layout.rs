//! The fixture tree described as data.
//!
//! A [`Layout`] is an ordered list of entries. Order matters: every entry's
//! parent appears before it, and the builder creates entries in exactly this
//! order.

use std::fmt;
use std::path::{Component, Path};

/// Stage of the build an entry belongs to. Only used for progress logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Directories,
    Files,
    Save,
    Globber,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Directories => "Create directories",
            Phase::Files => "Create files",
            Phase::Save => "Create save folder",
            Phase::Globber => "Create glob test directory loop",
        };
        f.write_str(s)
    }
}

/// What to create at a path relative to the fixture root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    Dir,
    /// Regular file filled with `len` random bytes.
    File { len: u64 },
    /// Symbolic link with a raw, unresolved target.
    Symlink { target: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub phase: Phase,
    pub path: &'static str,
    pub kind: Kind,
}

impl Entry {
    pub const fn dir(phase: Phase, path: &'static str) -> Self {
        Entry {
            phase,
            path,
            kind: Kind::Dir,
        }
    }

    pub const fn file(phase: Phase, path: &'static str, len: u64) -> Self {
        Entry {
            phase,
            path,
            kind: Kind::File { len },
        }
    }

    pub const fn symlink(phase: Phase, path: &'static str, target: &'static str) -> Self {
        Entry {
            phase,
            path,
            kind: Kind::Symlink { target },
        }
    }
}

/// Data files of the standard tree as (relative path, length in bytes).
pub const STANDARD_FILES: &[(&str, u64)] = &[
    ("a", 128),
    ("b", 23434),
    ("emptyfile", 0),
    ("dir1/a", 342),
    ("dir1/b", 2345670),
    ("dir1/c", 3425455),
    ("dir1/d", 2323244),
    ("dir1/dir2/filea.bla", 213213),
    ("dir1/dir2/fileb.bla", 213213),
    ("dir1/dir2/filec.bla", 213213),
    ("dir1/dir2/filed.bla", 213213),
    ("dir1/dir2/filee.bla", 213213),
];

/// Location of the cycle-forming link inside the standard tree.
pub const BACKTOHELL: &str = "globber/subdir/subdir2/subdir3/backtohell";
/// Raw target of [`BACKTOHELL`]; three hops up from `subdir3` is `globber`.
pub const BACKTOHELL_TARGET: &str = "../../..";

/// An ordered set of entries to create below a root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    entries: Vec<Entry>,
}

impl Layout {
    pub fn new(entries: Vec<Entry>) -> Self {
        Layout { entries }
    }

    /// The tree the copy, glob and symlink-walk tests expect.
    pub fn standard() -> Self {
        use Phase::*;

        let mut entries = Vec::new();
        for d in ["dir1", "dir2", "dir3", "dir4"] {
            entries.push(Entry::dir(Directories, d));
        }
        // Same names one level down on purpose.
        for d in ["dir1/dir1", "dir1/dir2", "dir1/dir3", "dir1/dir4"] {
            entries.push(Entry::dir(Directories, d));
        }
        for &(path, len) in STANDARD_FILES {
            entries.push(Entry::file(Files, path, len));
        }
        entries.push(Entry::dir(Save, "save"));
        for d in [
            "globber",
            "globber/subdir",
            "globber/other",
            "globber/a",
            "globber/subdir/subdir2",
            "globber/subdir/subdir2/subdir3",
        ] {
            entries.push(Entry::dir(Globber, d));
        }
        entries.push(Entry::symlink(Globber, BACKTOHELL, BACKTOHELL_TARGET));

        Layout { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Total number of random bytes the layout will write.
    pub fn total_bytes(&self) -> u64 {
        self.entries
            .iter()
            .map(|e| match e.kind {
                Kind::File { len } => len,
                _ => 0,
            })
            .sum()
    }

    /// Check that paths are relative, unique, and that every parent is a
    /// directory declared earlier in the list.
    pub fn validate(&self) -> Result<(), String> {
        let mut dirs: Vec<&Path> = Vec::new();
        let mut seen: Vec<&Path> = Vec::new();
        for e in &self.entries {
            let p = Path::new(e.path);
            if !p.components().all(|c| matches!(c, Component::Normal(_))) {
                return Err(format!("entry `{}` is not a plain relative path", e.path));
            }
            if seen.contains(&p) {
                return Err(format!("entry `{}` is declared twice", e.path));
            }
            if let Some(parent) = p.parent().filter(|p| !p.as_os_str().is_empty()) {
                if !dirs.contains(&parent) {
                    return Err(format!(
                        "entry `{}` comes before its parent directory `{}`",
                        e.path,
                        parent.display()
                    ));
                }
            }
            if e.kind == Kind::Dir {
                dirs.push(p);
            }
            seen.push(p);
        }
        Ok(())
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::standard()
    }
}
