/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{load_settings, settings_file_name, settings_filename_from_env};
pub use types::{BuildType, Settings};
