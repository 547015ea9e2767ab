use crate::error::CodecError;
use anyhow::Result;
use std::io::{ErrorKind, Read, Write};

/// A transfer shorter than requested is truncation, unless nothing was
/// requested; a zero-length request succeeds trivially.
pub(crate) fn ensure_transfer_len(actual: usize, expected: usize) -> Result<usize> {
    if expected > 0 && actual != expected {
        return Err(CodecError::TruncatedIo { expected, actual }.into());
    }
    Ok(actual)
}

/// Writes the whole buffer. A sink that stops accepting bytes before the
/// buffer is exhausted surfaces as `TruncatedIo`.
pub(crate) fn write_fixed<W: Write>(w: &mut W, buf: &[u8]) -> Result<usize> {
    let mut w_len = 0;
    while w_len < buf.len() {
        match w.write(&buf[w_len..]) {
            Ok(0) => break,
            Ok(n) => w_len += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    ensure_transfer_len(w_len, buf.len())
}

/// Fills the whole buffer. End-of-stream before the buffer is full surfaces
/// as `TruncatedIo`.
pub(crate) fn read_fixed<R: Read>(r: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut r_len = 0;
    while r_len < buf.len() {
        match r.read(&mut buf[r_len..]) {
            Ok(0) => break,
            Ok(n) => r_len += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    ensure_transfer_len(r_len, buf.len())
}
