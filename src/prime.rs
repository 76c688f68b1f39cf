use crate::arith::{Wide, Word};
use crate::error::{Result, RsaError};

/// Trial-division primality test.
///
/// Divides by every integer from 2 up to the square root of `p`.
/// 0 and 1 are not prime.
pub fn is_prime(p: Word) -> bool {
    if p < 2 {
        return false;
    }

    let mut i: Word = 2;
    while (i as Wide) * (i as Wide) <= p as Wide {
        if p % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Find the first prime at or after `start`, testing odd candidates only.
///
/// An even `start` is bumped to the next odd value. `report` is called with
/// every candidate and its verdict, in order. Fails once the next candidate
/// would not fit a word.
pub fn find_next_prime<F>(start: Word, mut report: F) -> Result<Word>
where
    F: FnMut(Word, bool),
{
    let mut candidate = start | 1;

    loop {
        let prime = is_prime(candidate);
        report(candidate, prime);
        if prime {
            return Ok(candidate);
        }
        candidate = match candidate.checked_add(2) {
            Some(next) => next,
            None => return Err(RsaError::PrimeSearchExhausted(start)),
        };
    }
}
