//! User config directory resolution with test isolation support.
//!
//! `dirs::config_dir()` asks the platform (XDG on Linux, Known Folders on
//! Windows) and ignores `HOME` on Windows, so tests point
//! `ULSTOOLS_TEST_CONFIG_DIR` at a temp directory instead.

use std::path::PathBuf;

/// Environment variable overriding the user config directory.
pub const ULSTOOLS_TEST_CONFIG_DIR_VAR: &str = "ULSTOOLS_TEST_CONFIG_DIR";

/// Directory holding `ulstools/config.toml`.
///
/// Returns `ULSTOOLS_TEST_CONFIG_DIR` when set, otherwise the platform config
/// directory, or `None` when neither can be resolved.
pub fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os(ULSTOOLS_TEST_CONFIG_DIR_VAR)
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

/// Full path of the user config file, if a config directory exists.
pub fn user_config_file() -> Option<PathBuf> {
    user_config_dir().map(|dir| dir.join("ulstools").join("config.toml"))
}
