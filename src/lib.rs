//! Pattern-delimited codes for Rust.
//!
//! The pattern-delimited code writes an unsigned integer of up to 64
//! significant bits as a frame of 1 to 10 bytes. A frame begins with as
//! many one bits as it has bytes, then a zero bit, then the value itself,
//! so a decoder knows the frame length after seeing its leading bits and
//! frames can be concatenated without any separator. So far we have:
//!
//!   - the [encoder and decoder](coding/index.html) together with the
//!     frame [length arithmetic](coding/fn.minimal_frame_bytes.html);
//!   - the [`ByteSource`](stream/trait.ByteSource.html) the decoder pulls
//!     from, implemented for every `std::io::Read`; and
//!   - a [frame iterator](stream/struct.Frames.html) for decoding a whole
//!     stream.
//!
//! # Usage
//!
//! ```rust
//! use pattern_delimited::coding::{decode, encode};
//!
//! let frame = encode(300);
//! assert_eq!(&[0xC1, 0x2C], frame.as_bytes());
//!
//! let mut source = frame.as_bytes();
//! assert_eq!(Some((300, 2)), decode(&mut source).unwrap());
//! ```

#![warn(missing_docs)]

mod internal;

pub mod coding;
pub use coding::{ByteCode, Frame, PatternDelimited, PATTERN};

pub mod stream;
pub use stream::{ByteSource, Frames};
