use crate::error::{DecodeError, Result};

/// Forward-only read pointer into an immutable byte buffer.
///
/// The cursor is the only thing that moves through the buffer during a
/// decode; every read goes through `advance`, which either returns exactly
/// `n` bytes and moves the position by `n`, or fails without moving.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    position: usize,
    last: &'a [u8],
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> ByteCursor<'a> {
        ByteCursor { buf, position: 0, last: &buf[..0] }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.position
    }

    /// The span returned by the most recent successful `advance`.
    pub fn last_span(&self) -> &'a [u8] {
        self.last
    }

    /// Returns the next `n` bytes and moves past them.
    ///
    /// Fails with `OutOfBounds` (carrying the current position) when fewer
    /// than `n` bytes remain; the position is left untouched in that case.
    pub fn advance(&mut self, n: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(DecodeError::OutOfBounds {
                offset: self.position,
                requested: n,
                remaining,
            });
        }
        let span = &self.buf[self.position..self.position + n];
        self.position += n;
        self.last = span;
        Ok(span)
    }

    /// `advance` for a fixed-size field, returned by value.
    pub fn advance_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let span = self.advance(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(span);
        Ok(out)
    }
}
