use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::building::layout::{Kind, Layout, Phase};
use crate::fs_op::{self, FixtureError};

/// Summary of a finished build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub root: PathBuf,
    /// Seed the content was generated from; pass it back in to reproduce it.
    pub seed: u64,
    /// Directories created, the root included.
    pub directories: usize,
    pub files: usize,
    pub symlinks: usize,
    pub bytes_written: u64,
}

/// Lays a [`Layout`] down below a fresh root directory.
///
/// The build is fail-fast: the first filesystem error is returned as-is and
/// whatever was created up to that point stays on disk.
#[derive(Debug, Clone, Default)]
pub struct FixtureBuilder {
    layout: Layout,
    seed: Option<u64>,
}

impl FixtureBuilder {
    /// Builder for the standard tree with unseeded content.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Fix the PRNG seed so file content is reproducible.
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Create `root` (which must not exist yet) and every layout entry below it.
    pub fn build(&self, root: &Path) -> Result<BuildReport, FixtureError> {
        self.layout.validate().map_err(FixtureError::InvalidLayout)?;
        if !fs_op::symlinks_supported() {
            if let Some(link) = self
                .layout
                .entries()
                .iter()
                .find(|e| matches!(e.kind, Kind::Symlink { .. }))
            {
                return Err(FixtureError::Unsupported {
                    path: root.join(link.path),
                    source: None,
                });
            }
        }

        let seed = self.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        info!(root = %root.display(), seed, "building fixture tree");

        let mut report = BuildReport {
            root: root.to_path_buf(),
            seed,
            directories: 0,
            files: 0,
            symlinks: 0,
            bytes_written: 0,
        };

        fs_op::create_dir(root)?;
        report.directories += 1;

        let mut phase: Option<Phase> = None;
        for entry in self.layout.entries() {
            if phase != Some(entry.phase) {
                info!("{}", entry.phase);
                phase = Some(entry.phase);
            }

            let path = root.join(entry.path);
            match entry.kind {
                Kind::Dir => {
                    fs_op::create_dir(&path)?;
                    report.directories += 1;
                }
                Kind::File { len } => {
                    debug!("create {} with length of {}", entry.path, len);
                    report.bytes_written += fs_op::create_random_file(&path, len, &mut rng)?;
                    report.files += 1;
                }
                Kind::Symlink { target } => {
                    debug!("link {} -> {}", entry.path, target);
                    fs_op::create_symlink(Path::new(target), &path)?;
                    report.symlinks += 1;
                }
            }
        }

        info!(
            directories = report.directories,
            files = report.files,
            symlinks = report.symlinks,
            bytes = report.bytes_written,
            "fixture tree complete"
        );
        Ok(report)
    }
}

/// Build the standard fixture tree at `root`.
///
/// `root` must not exist; its parent must. With `seed = None` a fresh seed is
/// drawn and returned in the report.
pub fn build_fixture<P: AsRef<Path>>(
    root: P,
    seed: Option<u64>,
) -> Result<BuildReport, FixtureError> {
    FixtureBuilder::new().seed(seed).build(root.as_ref())
}
