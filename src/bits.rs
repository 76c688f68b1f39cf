use crate::arith::{Word, WORD_BITS};
use crate::error::{Result, RsaError};

/// A cursor over a byte buffer, addressable one bit at a time.
///
/// Bits are taken least-significant first within each byte, and values are
/// assembled least-significant first, so a run of `n` bits may start and end
/// anywhere inside a byte.
#[derive(Debug, Clone)]
pub struct BitCursor<B> {
    buf: B,
    byte: usize,
    offset: u32,
}

impl<B: AsRef<[u8]>> BitCursor<B> {
    pub fn new(buf: B) -> Self {
        Self {
            buf,
            byte: 0,
            offset: 0,
        }
    }

    /// Current `(byte, bit offset)` position, offset in `0..8`
    #[cfg(test)]
    pub(crate) fn position(&self) -> (usize, u32) {
        (self.byte, self.offset)
    }

    /// Current position counted in bits from the start of the buffer
    pub fn bit_position(&self) -> usize {
        self.byte * 8 + self.offset as usize
    }

    pub fn bits_remaining(&self) -> usize {
        (self.buf.as_ref().len() * 8).saturating_sub(self.bit_position())
    }

    #[cfg(test)]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.bits_remaining() == 0
    }

    pub fn into_inner(self) -> B {
        self.buf
    }

    /// Read `n` bits and advance. Bits past the end of the buffer read as 0.
    pub fn read(&mut self, n: u32) -> Word {
        debug_assert!(n <= WORD_BITS);
        let mut value: Word = 0;

        for counter in 0..n {
            let bit = self
                .buf
                .as_ref()
                .get(self.byte)
                .map_or(0, |b| (b >> self.offset) & 1);
            value |= (bit as Word) << counter;
            self.advance();
        }
        value
    }

    fn advance(&mut self) {
        self.offset += 1;
        if self.offset >= 8 {
            self.offset = 0;
            self.byte += 1;
        }
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> BitCursor<B> {
    /// Write the low `n` bits of `value` and advance.
    ///
    /// Bits are OR-ed into place, so the destination must start out zeroed.
    pub fn write(&mut self, n: u32, value: Word) -> Result<()> {
        debug_assert!(n <= WORD_BITS);
        let available = self.bits_remaining();
        if n as usize > available {
            return Err(RsaError::BufferOverrun {
                requested: n as usize,
                available,
            });
        }

        for counter in 0..n {
            let bit = ((value >> counter) & 1) as u8;
            self.buf.as_mut()[self.byte] |= bit << self.offset;
            self.advance();
        }
        Ok(())
    }
}
