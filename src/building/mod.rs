//! Fixture tree construction: the layout, the builder that lays it down and
//! the manifest describing the result.

pub mod builder;
pub mod layout;
pub mod manifest;

pub use builder::{build_fixture, BuildReport, FixtureBuilder};
pub use layout::{Entry, Kind, Layout, Phase};
pub use manifest::{render_manifest, write_manifest};
