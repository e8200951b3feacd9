use std::fmt;
use std::io::{Result, Write};
use std::ops::Deref;

use byteorder::{BigEndian, ByteOrder};
use num_traits::{NumCast, PrimInt, Unsigned};
use tracing::{debug, trace};

use super::*;
use crate::internal::errors::*;
use crate::stream::ByteSource;

/// The pattern-delimited code.
///
/// A frame of `T` bytes starts with a run of `T` one bits and a zero
/// terminator; the remaining `7T - 1` bits hold the value, big-endian and
/// zero-extended. The run shares its bytes with the value's leading zeros,
/// so small values take a single byte and 64-bit values take ten.
#[derive(Clone, Copy, Debug, Default)]
pub struct PatternDelimited;

/// An instance of `PatternDelimited`.
pub const PATTERN: PatternDelimited = PatternDelimited;

/// One encoded value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame {
    bytes: [u8; MAX_FRAME_BYTES],
    len: usize,
}

#[allow(clippy::len_without_is_empty)]
impl Frame {
    /// Encodes `value` into a fresh frame.
    pub fn encode(value: u64) -> Self {
        let mut bytes = [0; MAX_FRAME_BYTES];
        let len = encode_into(value, &mut bytes);
        Frame { bytes, len }
    }

    /// The frame's length in bytes, between 1 and `MAX_FRAME_BYTES`.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The frame's bytes, in wire order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl Deref for Frame {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Frame[")?;
        for (i, byte) in self.as_bytes().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        write!(f, "]")
    }
}

/// Encodes `value` into a fresh frame.
#[inline]
pub fn encode(value: u64) -> Frame {
    Frame::encode(value)
}

/// Encodes `value` into the front of `buf`, returning the frame length.
///
/// The whole buffer is overwritten, so it may be reused from call to call;
/// bytes past the frame are left zero.
pub fn encode_into(value: u64, buf: &mut [u8; MAX_FRAME_BYTES]) -> usize {
    let bits = significant_bits(value);

    // The value sits right-aligned in big-endian order, so a candidate frame
    // of `len` bytes is the last `len` bytes of the buffer, and growing the
    // candidate brings in one more zero byte on the left.
    *buf = [0; MAX_FRAME_BYTES];
    BigEndian::write_u64(&mut buf[MAX_FRAME_BYTES - 8..], value);

    let mut len = ((bits as usize + 7) / 8).max(1);
    while len < MAX_FRAME_BYTES && prefix_collides(&buf[MAX_FRAME_BYTES - len..], len) {
        trace!(value, len, "run collides with value bits; growing frame");
        len += 1;
    }
    debug_assert_eq!(len, minimal_frame_bytes(bits));

    let frame = &mut buf[MAX_FRAME_BYTES - len..];
    for byte in &mut frame[..len / 8] {
        *byte = 0xFF;
    }
    frame[len / 8] |= high_mask(len % 8);

    buf.copy_within(MAX_FRAME_BYTES - len.., 0);
    for byte in &mut buf[len..] {
        *byte = 0;
    }

    len
}

/// Writes the frame for `value` to `sink`, returning its length.
pub fn encode_to<W: Write + ?Sized>(sink: &mut W, value: u64) -> Result<usize> {
    let frame = encode(value);
    sink.write_all(&frame)?;
    Ok(frame.len())
}

/// Reads one frame from `source`, returning the value and the frame length.
///
/// `Ok(None)` means the source ended cleanly before the frame's first byte.
/// Running out of bytes later is an `UnexpectedEof` error, and any other
/// failure of the source is passed through as is. No value is produced
/// from a partial frame.
pub fn decode<R: ByteSource + ?Sized>(source: &mut R) -> Result<Option<(u64, usize)>> {
    const WHO: &str = "PatternDelimited::decode";

    let mut buf = [0u8; MAX_FRAME_BYTES];

    match source.read_exact(&mut buf[..1]) {
        Ok(()) => {}
        Err(ref e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e),
    }

    // Whole bytes of the run. Two of them already announce a frame longer
    // than any 64-bit value needs, so stop reading there.
    let mut read = 1;
    while buf[read - 1] == 0xFF {
        if 8 * read > MAX_FRAME_BYTES {
            debug!(read, "run exceeds the longest frame");
            return too_many_bits(WHO);
        }
        truncated(source.read_exact(&mut buf[read..read + 1]), WHO)?;
        read += 1;
    }

    let last = buf[read - 1];
    let len = 8 * (read - 1) + last.leading_ones() as usize;

    if len == 0 {
        debug!(first = last, "frame without a run");
        return malformed(WHO, last);
    }

    if len > MAX_FRAME_BYTES {
        debug!(len, "run exceeds the longest frame");
        return too_many_bits(WHO);
    }

    if len > read {
        truncated(source.read_exact(&mut buf[read..len]), WHO)?;
    }

    let frame = &mut buf[..len];
    for byte in &mut frame[..len / 8] {
        *byte = 0;
    }
    frame[len / 8] &= !high_mask(len % 8 + 1);

    let (high, low) = frame.split_at(len.saturating_sub(8));
    if high.iter().any(|&byte| byte != 0) {
        debug!(len, "payload wider than 64 bits");
        return too_many_bits(WHO);
    }

    let mut word = [0u8; 8];
    word[8 - low.len()..].copy_from_slice(low);

    Ok(Some((BigEndian::read_u64(&word), len)))
}

impl ByteCode for PatternDelimited {
    fn encode<W, N>(&self, sink: &mut W, value: N) -> Result<usize>
    where
        W: Write + ?Sized,
        N: PrimInt + Unsigned,
    {
        match value.to_u64() {
            Some(value) => encode_to(sink, value),
            None => out_of_range("PatternDelimited::encode"),
        }
    }

    fn decode<R, N>(&self, source: &mut R) -> Result<Option<N>>
    where
        R: ByteSource + ?Sized,
        N: PrimInt + Unsigned,
    {
        match decode(source)? {
            Some((value, _)) => match <N as NumCast>::from(value) {
                Some(value) => Ok(Some(value)),
                None => too_many_bits("PatternDelimited::decode"),
            },
            None => Ok(None),
        }
    }
}

/// Whether the run of `len` ones and its terminator would land on a set
/// value bit of `frame`.
fn prefix_collides(frame: &[u8], len: usize) -> bool {
    let prefix = len + 1;
    frame[..prefix / 8].iter().any(|&byte| byte != 0)
        || (prefix % 8 != 0 && frame[prefix / 8] & high_mask(prefix % 8) != 0)
}

/// The top `n` bits of a byte, for `n` in `0..=8`.
#[inline]
fn high_mask(n: usize) -> u8 {
    (0xFF00u16 >> n) as u8
}
