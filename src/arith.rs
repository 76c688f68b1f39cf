//! Fixed-width word arithmetic: bit widths and modular exponentiation.
//!
//! Every key component and block value is a [`Word`]. Products are formed
//! in [`Wide`] so that nothing overflows before the modulo reduction.

/// The fixed machine word holding `p`, `q`, `n`, `e`, `d` and every block.
pub type Word = u32;

/// Double-width accumulator for modular products.
pub type Wide = u64;

/// Number of bits in a [`Word`].
pub const WORD_BITS: u32 = Word::BITS;

/// Number of bits needed to represent `x`, zero for `x == 0`.
pub fn bitwidth(x: Word) -> u32 {
    WORD_BITS - x.leading_zeros()
}

/// Compute `a^b mod n` by square-and-multiply over every bit of the word,
/// from the most significant down to bit 0.
///
/// `n` must be non-zero. No other checks are made: operands are trusted to
/// fit the word.
pub fn modexp(a: Word, b: Word, n: Word) -> Word {
    let a = a as Wide;
    let n = n as Wide;
    let mut d: Wide = 1;

    for i in (0..WORD_BITS).rev() {
        d = (d * d) % n;
        if (b >> i) & 1 == 1 {
            d = (d * a) % n;
        }
    }

    // d < n <= Word::MAX
    d as Word
}
