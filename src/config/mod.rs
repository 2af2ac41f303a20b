//! Configuration module for ulstools
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ULSTOOLS_*)
//! 3. Project config (./ulstools.toml)
//! 4. User config (<config dir>/ulstools/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{with_env_overrides_from, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, OutputConfig, OutputFormat, ProcessConfig, Verbosity};
