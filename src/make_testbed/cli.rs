use std::path::PathBuf;

use clap::Parser;

use testbed::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "make_testbed", version)]
#[command(
    about = "Create the fixture tree used by the copy, glob and symlink-walk tests. \
             The root must not exist yet."
)]
pub struct Cli {
    /// Directory to create the fixture tree in [default: testbed]
    #[arg(short = 'r', long = "root")]
    pub root: Option<PathBuf>,

    /// Seed for the random file content; omit for a fresh seed each run.
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Write a listing of the built tree to this file (outside the root).
    #[arg(short = 'm', long = "manifest")]
    pub manifest: Option<PathBuf>,

    /// TOML settings file providing root, seed and manifest.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log every created entry.
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors.
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Cli {
    /// The command-line half of the settings, to overlay on a settings file.
    pub fn overrides(&self) -> Settings {
        Settings {
            root: self.root.clone(),
            seed: self.seed,
            manifest: self.manifest.clone(),
        }
    }

    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}
