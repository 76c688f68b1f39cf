use crate::arith::Word;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RsaError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not replace file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Out of memory: cannot allocate {0} bytes")]
    OutOfMemory(usize),

    #[error("The product of p = {p} and q = {q} is too big for a 32-bit modulus. Try again with smaller values")]
    ModulusOverflow { p: Word, q: Word },

    #[error("Cannot calculate a multiplicative inverse for any public exponent")]
    NoInverseFound,

    #[error("File is corrupted, cannot decrypt: {0}")]
    CorruptedFile(String),

    #[error("Could not find a prime at or after {0}")]
    PrimeSearchExhausted(Word),

    #[error("Bit buffer overrun: {requested} bits requested, {available} available")]
    BufferOverrun { requested: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, RsaError>;
