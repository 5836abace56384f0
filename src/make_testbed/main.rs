// make_testbed: build the fixture tree consumed by the copy, glob and
// symlink-walk tests.
// Usage: cargo run --bin make_testbed -- [--root DIR] [--seed N]

mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use testbed::building::{write_manifest, FixtureBuilder};
use testbed::fs_op::is_within;
use testbed::settings::{load_settings, Settings};

fn init_logging(default_level: &str) {
    // RUST_LOG wins over -v/-q when set.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let file_settings = match &cli.config {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };
    let settings = file_settings.overlay(cli.overrides());
    let root = settings.root_or_default();

    // Both checks run before anything is built.
    if let Some(manifest) = &settings.manifest {
        let inside = is_within(&root, manifest)
            .with_context(|| format!("failed to resolve manifest path {}", manifest.display()))?;
        if inside {
            bail!(
                "manifest {} must not be inside the fixture root {}",
                manifest.display(),
                root.display()
            );
        }
        if manifest.symlink_metadata().is_ok() {
            bail!("manifest {} already exists", manifest.display());
        }
    }

    let report = FixtureBuilder::new()
        .seed(settings.seed)
        .build(&root)
        .with_context(|| format!("failed to build fixture tree at {}", root.display()))?;

    if let Some(manifest) = &settings.manifest {
        let n = write_manifest(&root, manifest)
            .with_context(|| format!("failed to write manifest {}", manifest.display()))?;
        tracing::info!("wrote {} entries to {}", n, manifest.display());
    }

    println!(
        "Created {} ({} directories, {} files, {} symlinks, {} bytes) with seed {}",
        report.root.display(),
        report.directories,
        report.files,
        report.symlinks,
        report.bytes_written,
        report.seed
    );
    Ok(())
}
