//! ulstools - small utilities around Finnish identity codes and desktop scripts
//!
//! The core is the hetu validator: [`is_valid_hetu`] checks the structure and
//! checksum of a Finnish personal identity code and [`age_from_hetu`] derives
//! an age from it. Alongside sit two helpers for console-script launched
//! tools: [`already_running`] and [`temp_filename`].

pub mod config;
pub mod domain;
pub mod env;
pub mod error;
pub mod hetu;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use config::{Config, OutputFormat, ProcessConfig, Verbosity};
pub use domain::value_objects::{Century, Hetu, HetuError, Sex};
pub use env::already_running;
pub use error::{UlsError, UlsResult};
pub use hetu::{age_from_hetu, checksum_char, is_valid_hetu, CHECKSUM_ALPHABET};
pub use infrastructure::temp_filename;
