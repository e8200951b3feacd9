//! The pattern-delimited code.
//!
//! Values are written as whole-byte frames that a decoder can split out of
//! a byte stream without any outside length information. Encoding goes to
//! any `std::io::Write`; decoding pulls from a
//! [`ByteSource`](../stream/trait.ByteSource.html).

mod traits;
pub use self::traits::*;

mod frame_math;
pub use self::frame_math::*;

mod pattern;
pub use self::pattern::*;

#[cfg(test)]
mod properties {
    /// Stretches a small quickcheck seed across the full width of a `u64`,
    /// then drops `shift` high bits so every value width gets exercised.
    pub fn spread(seed: u64, shift: u8) -> u64 {
        seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> (shift % 64)
    }
}
