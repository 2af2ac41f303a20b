//! Domain Layer
//!
//! Pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Hetu, Century, Sex)
//! - `services/` - Stateless computations (age, running-script matching)
//! - `ports/` - Interface definitions for infrastructure
//!
//! The only I/O the domain ever needs (the process table) goes through a
//! trait in `ports/`.

pub mod ports;
pub mod services;
pub mod value_objects;
