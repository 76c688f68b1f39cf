//! rsacrypt - Fixed-Width RSA File Encryption
//!
//! A small RSA implementation over 32-bit words: key pairs are derived from
//! two primes whose product fits a `u32`, and files are encrypted in place
//! block by block. Keys this size are illustrative only and offer no real
//! protection.
//!
//! ## File Pipeline
//!
//! ```text
//! Encrypt: bytes → (bitwidth(n) - 1)-bit blocks → m^e mod n → bitwidth(n)-bit blocks → Frame
//! Decrypt: Frame → length check → c^d mod n → bytes truncated to the recorded length
//! ```
//!
//! - **Frame**: 8-byte little-endian original length, then the packed ciphertext
//! - **BitCursor**: LSB-first bit packing across byte boundaries
//! - **ModExp**: square-and-multiply with a 64-bit accumulator
//!
//! ## Example
//!
//! ```no_run
//! use rsacrypt::cli::{decrypt_file, encrypt_file, DecryptOptions, EncryptOptions};
//! use rsacrypt::keygen::generate_keys;
//! use std::path::Path;
//!
//! let keys = generate_keys(61, 53).unwrap();
//! println!("{}", keys);
//!
//! let path = Path::new("notes.txt");
//! encrypt_file(path, &keys.public, &EncryptOptions::default()).unwrap();
//! decrypt_file(path, &keys.private, &DecryptOptions::default()).unwrap();
//! ```

pub mod arith;
pub mod bits;
pub mod cli;
pub mod error;
pub mod file;
pub mod frame;
pub mod keygen;
pub mod prime;
pub mod transcode;

pub use arith::{bitwidth, modexp, Wide, Word, WORD_BITS};
pub use error::{Result, RsaError};
pub use frame::Frame;
pub use keygen::{generate_keys, KeyPair, PrivateKey, PublicKey};
pub use transcode::{decrypt, encrypt};
