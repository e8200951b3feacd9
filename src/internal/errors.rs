use std::io::{Error, ErrorKind, Result};

pub fn out_of_bytes<A>(who: &str) -> Result<A> {
    Err(Error::new(
        ErrorKind::UnexpectedEof,
        format!("{}: could not decode: more bytes expected", who),
    ))
}

pub fn too_many_bits<A>(who: &str) -> Result<A> {
    Err(Error::new(
        ErrorKind::InvalidData,
        format!("{}: value too big for type", who),
    ))
}

pub fn out_of_range<A>(who: &str) -> Result<A> {
    Err(Error::new(
        ErrorKind::InvalidInput,
        format!("{}: value wider than 64 significant bits", who),
    ))
}

pub fn malformed<A>(who: &str, first: u8) -> Result<A> {
    Err(Error::new(
        ErrorKind::InvalidData,
        format!("{}: malformed frame: leading byte {:#04x} has no run", who, first),
    ))
}

/// Turns an end-of-input in the middle of a frame into a truncation error,
/// passing every other source failure through unchanged.
pub fn truncated(result: Result<()>, who: &str) -> Result<()> {
    match result {
        Err(ref e) if e.kind() == ErrorKind::UnexpectedEof => out_of_bytes(who),
        otherwise => otherwise,
    }
}
