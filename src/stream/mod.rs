//! Byte sources for decoding.

mod traits;
pub use self::traits::*;

mod frames;
pub use self::frames::*;
