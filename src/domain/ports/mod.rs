//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod process_source;

pub use process_source::{ProcessInfo, ProcessSource};
