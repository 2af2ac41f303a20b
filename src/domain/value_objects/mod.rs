//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod century;
mod hetu;
mod sex;

pub use century::Century;
pub use hetu::{checksum_char, Hetu, HetuError, CHECKSUM_ALPHABET, HETU_LEN};
pub use sex::Sex;
