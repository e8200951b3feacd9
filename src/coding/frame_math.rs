//! Length arithmetic for pattern-delimited frames.
//!
//! A frame of `T` bytes spends `T + 1` of its `8T` bits on the unary run
//! and its terminator, leaving `7T - 1` bits for the value.

/// The number of bits in the widest supported value.
pub const MAX_VALUE_BITS: u32 = 64;

/// The length of the longest frame, the one that carries a 64-bit value.
pub const MAX_FRAME_BYTES: usize = 10;

/// The number of bits needed to write `value` without leading zeros.
///
/// Zero needs no bits at all.
#[inline]
pub fn significant_bits(value: u64) -> u32 {
    MAX_VALUE_BITS - value.leading_zeros()
}

/// The smallest frame length whose payload holds `significant_bits` bits.
///
/// Defined for `significant_bits` up to `MAX_VALUE_BITS`.
#[inline]
pub fn minimal_frame_bytes(significant_bits: u32) -> usize {
    // Smallest T with 7T - 1 >= n, i.e. ceil((n + 1) / 7).
    (significant_bits as usize + 1 + 6) / 7
}

/// The number of value bits in a frame of `frame_bytes` bytes.
#[inline]
pub fn payload_capacity_bits(frame_bytes: usize) -> usize {
    7 * frame_bytes - 1
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn significant() {
        assert_eq!(0, significant_bits(0));
        assert_eq!(1, significant_bits(1));
        assert_eq!(2, significant_bits(2));
        assert_eq!(2, significant_bits(3));
        assert_eq!(8, significant_bits(0xFF));
        assert_eq!(64, significant_bits(1 << 63));
        assert_eq!(64, significant_bits(u64::max_value()));
    }

    #[test]
    fn minimal() {
        assert_eq!(1, minimal_frame_bytes(0));
        assert_eq!(1, minimal_frame_bytes(6));
        assert_eq!(2, minimal_frame_bytes(7));
        assert_eq!(2, minimal_frame_bytes(13));
        assert_eq!(3, minimal_frame_bytes(14));
        assert_eq!(9, minimal_frame_bytes(62));
        assert_eq!(10, minimal_frame_bytes(63));
        assert_eq!(10, minimal_frame_bytes(64));
    }

    #[test]
    fn capacity() {
        assert_eq!(6, payload_capacity_bits(1));
        assert_eq!(13, payload_capacity_bits(2));
        assert_eq!(69, payload_capacity_bits(MAX_FRAME_BYTES));
    }

    #[quickcheck]
    fn qc_minimal_is_smallest(bits: u8) -> bool {
        let bits = u32::from(bits) % (MAX_VALUE_BITS + 1);
        let len = minimal_frame_bytes(bits);

        payload_capacity_bits(len) >= bits as usize
            && (len == 1 || payload_capacity_bits(len - 1) < bits as usize)
    }
}
