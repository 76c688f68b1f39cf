use crate::arith::Word;
use crate::error::Result;
use crate::prime::find_next_prime;
use std::io::Write;

/// Search for the first prime at or after `start`, writing one
/// `Testing N... verdict` line per candidate to `out`
pub fn find_prime<W: Write>(start: Word, out: &mut W) -> Result<Word> {
    let mut write_error = None;

    let found = find_next_prime(start, |candidate, prime| {
        if write_error.is_some() {
            return;
        }
        let verdict = if prime { "is a prime" } else { "not prime" };
        let line = writeln!(out, "Testing {}... {}", candidate, verdict).and_then(|_| out.flush());
        if let Err(e) = line {
            write_error = Some(e);
        }
    });

    if let Some(e) = write_error {
        return Err(e.into());
    }
    found
}
