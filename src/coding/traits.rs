use std::io::{Result, Write};

use num_traits::{PrimInt, Unsigned};

use crate::stream::ByteSource;

/// A byte-aligned code that writes arbitrary sized unsigned integers in
/// a self-delimiting form.
pub trait ByteCode {
    /// Writes `value` to `sink`, returning the number of bytes written.
    ///
    /// Fails with `InvalidInput` if `value` is wider than the code supports.
    fn encode<W, N>(&self, sink: &mut W, value: N) -> Result<usize>
    where
        W: Write + ?Sized,
        N: PrimInt + Unsigned;

    /// Reads a value from `source`.
    ///
    /// `Ok(None)` indicates (benign) EOF.
    fn decode<R, N>(&self, source: &mut R) -> Result<Option<N>>
    where
        R: ByteSource + ?Sized,
        N: PrimInt + Unsigned;
}
