pub mod read_settings;

// Re-export commonly used types/functions for convenience
pub use read_settings::{load_settings, parse_settings, Settings, DEFAULT_ROOT};
