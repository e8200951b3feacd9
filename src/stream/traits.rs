use std::io::{Read, Result};

/// Supplies bytes to a decoder on demand.
///
/// `read_exact` either fills all of `buf` or fails. A source that has run
/// dry reports `ErrorKind::UnexpectedEof`; any other error is a failure of
/// the underlying medium. A short read is never reported as success.
///
/// The decoder tells the two apart by `ErrorKind` alone: `UnexpectedEof`
/// before the first byte of a frame is taken as a clean end of input. An
/// implementation must therefore never use `UnexpectedEof` for a failure
/// of the medium, or that failure will look like the end of the stream.
///
/// Every `std::io::Read` is a byte source, so standard input, files,
/// sockets and in-memory slices can be decoded from directly.
pub trait ByteSource {
    /// Reads exactly `buf.len()` bytes into `buf`.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()>;
}

impl<R: Read + ?Sized> ByteSource for R {
    #[inline]
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        Read::read_exact(self, buf)
    }
}
