//! Filesystem primitives the fixture builder is made of.
//!
//! Each helper creates exactly one entry and refuses to touch anything that is
//! already there. Failures come back as [`FixtureError`] tagged with the path.

pub mod create;
pub mod error;
pub mod path;
pub mod symlink;

pub use create::{create_dir, create_random_file};
pub use error::FixtureError;
pub use path::{is_within, resolve_path};
pub use symlink::{create_symlink, is_symlink, read_symlink, symlinks_supported};
