use std::io::Result;

use crate::coding;
use crate::stream::ByteSource;

/// Decodes frame after frame from one byte source.
///
/// Each item is a value and the length of the frame it came from. The
/// iterator ends when the source ends cleanly between frames, and yields
/// nothing further after its first error.
#[derive(Debug)]
pub struct Frames<R> {
    source: R,
    failed: bool,
}

impl<R: ByteSource> Frames<R> {
    /// Creates an iterator over the frames in `source`.
    pub fn new(source: R) -> Self {
        Frames {
            source,
            failed: false,
        }
    }

    /// Returns the underlying source.
    #[inline]
    pub fn into_inner(self) -> R {
        self.source
    }
}

impl<R: ByteSource> Iterator for Frames<R> {
    type Item = Result<(u64, usize)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match coding::decode(&mut self.source) {
            Ok(Some(decoded)) => Some(Ok(decoded)),
            Ok(None) => None,
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: ByteSource> std::iter::FusedIterator for Frames<R> {}
