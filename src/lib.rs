pub mod fs_op;
pub mod settings;

// Fixture layout, builder and manifest (driven by the make_testbed binary)
#[path = "building/mod.rs"]
pub mod building;

pub use crate::building::{build_fixture, BuildReport, FixtureBuilder, Layout};
pub use crate::fs_op::FixtureError;
