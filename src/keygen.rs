use crate::arith::{bitwidth, Word, WORD_BITS};
use crate::error::{Result, RsaError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Public half of a key pair: encrypt with `m^e mod n`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    pub e: Word,
    pub n: Word,
}

/// Private half of a key pair: decrypt with `c^d mod n`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateKey {
    pub d: Word,
    pub n: Word,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

impl fmt::Display for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Public key:  e = {}, n = {}", self.public.e, self.public.n)?;
        write!(f, "Private key: d = {}", self.private.d)
    }
}

/// Derive a key pair from the primes `p` and `q`.
///
/// The public exponent is the smallest `e >= 2` coprime to
/// `f = (p-1)(q-1)`, and `d` is its inverse modulo `f`. Primality of the
/// inputs is not checked.
pub fn generate_keys(p: Word, q: Word) -> Result<KeyPair> {
    if p < 2 || q < 2 {
        return Err(RsaError::InvalidArguments(format!(
            "primes must be at least 2 (got p = {}, q = {})",
            p, q
        )));
    }
    if bitwidth(p) + bitwidth(q) > WORD_BITS {
        return Err(RsaError::ModulusOverflow { p, q });
    }

    let n = p
        .checked_mul(q)
        .ok_or(RsaError::ModulusOverflow { p, q })?;
    let f = (p - 1) * (q - 1);

    let (e, d) = (2..f)
        .find_map(|e| mod_inverse(e, f).map(|d| (e, d)))
        .ok_or(RsaError::NoInverseFound)?;

    Ok(KeyPair {
        public: PublicKey { e, n },
        private: PrivateKey { d, n },
    })
}

/// Multiplicative inverse of `a` modulo `m` by the extended Euclidean
/// algorithm, or `None` when `gcd(a, m) != 1`.
///
/// Coefficient triples `(u, v, r)` satisfy `u*m + v*a = r`; the walk stops
/// when the remainder reaches 1 (inverse is `v`) or 0 (no inverse).
pub fn mod_inverse(a: Word, m: Word) -> Option<Word> {
    let modulus = m as i64;
    let mut x: [i64; 3] = [1, 0, modulus];
    let mut y: [i64; 3] = [0, 1, a as i64];

    while y[2] != 0 {
        if y[2] == 1 {
            let inverse = if y[1] < 0 { y[1] + modulus } else { y[1] };
            return Some(inverse as Word);
        }
        let q = x[2] / y[2];
        let t = [x[0] - q * y[0], x[1] - q * y[1], x[2] - q * y[2]];
        x = y;
        y = t;
    }

    // gcd is in x[2] and it is not 1
    None
}
