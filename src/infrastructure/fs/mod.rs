//! File system helpers

mod config_dir;

pub use config_dir::{user_config_dir, user_config_file, ULSTOOLS_TEST_CONFIG_DIR_VAR};
