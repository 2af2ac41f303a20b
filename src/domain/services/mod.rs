//! Domain Services
//!
//! Pure business logic services that operate on domain values.
//! These services have no I/O dependencies and are easily testable.

mod age;
mod script_matcher;

pub use age::age_in_years;
pub use script_matcher::ScriptMatcher;
