use crate::error::Result;
use crate::file::{read_file, write_file, WriteMode};
use crate::keygen::PublicKey;
use crate::transcode::{encrypt, BlockWidths};
use std::path::Path;

/// Options for the encrypt command
#[derive(Debug, Clone, Default)]
pub struct EncryptOptions {
    pub write_mode: WriteMode,
}

/// Sizes reported after a file has been rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscodeSummary {
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub blocks: usize,
}

/// Encrypt a file in place with the public key
pub fn encrypt_file(
    path: &Path,
    key: &PublicKey,
    options: &EncryptOptions,
) -> Result<TranscodeSummary> {
    let plaintext = read_file(path)?;
    let blocks = BlockWidths::for_modulus(key.n)?.block_count(plaintext.len());

    let frame = encrypt(&plaintext, key)?;
    let encrypted = frame.to_bytes();
    write_file(path, &encrypted, options.write_mode)?;

    Ok(TranscodeSummary {
        input_bytes: plaintext.len(),
        output_bytes: encrypted.len(),
        blocks,
    })
}
