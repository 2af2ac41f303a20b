//! Infrastructure Layer
//!
//! Concrete implementations of domain ports and other I/O.
//!
//! ## Structure
//!
//! - `fs/` - Config directory resolution
//! - `process` - `sysinfo` process table adapter
//! - `temp` - Temporary filename reservation

pub mod fs;
pub mod process;
pub mod temp;

pub use process::SysinfoProcessSource;
pub use temp::{temp_filename, temp_filename_in};
