//! Block transcoding between plaintext bytes and encrypted frames.
//!
//! Plaintext is cut into blocks one bit narrower than the modulus, so every
//! block value is below `n`. Each block is raised to the key exponent and
//! stored at the full modulus width:
//!
//! ```text
//! bytes → plain-bit blocks → m^e mod n → cipher-bit blocks → Frame
//! Frame → cipher-bit blocks → c^d mod n → plain-bit blocks → bytes (truncated)
//! ```

use crate::arith::{bitwidth, modexp, Word};
use crate::bits::BitCursor;
use crate::error::{Result, RsaError};
use crate::frame::Frame;
use crate::keygen::{PrivateKey, PublicKey};

/// Plaintext and ciphertext block widths for one modulus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockWidths {
    /// Bits per plaintext block, `cipher - 1`
    pub plain: u32,
    /// Bits per ciphertext block, the width of `n`
    pub cipher: u32,
}

impl BlockWidths {
    pub fn for_modulus(n: Word) -> Result<Self> {
        if n < 2 {
            return Err(RsaError::InvalidArguments(format!(
                "modulus must be at least 2 (got {})",
                n
            )));
        }
        let cipher = bitwidth(n);
        Ok(Self {
            plain: cipher - 1,
            cipher,
        })
    }

    /// Number of plaintext blocks covering `len` bytes
    pub fn block_count(&self, len: usize) -> usize {
        (len as u128 * 8).div_ceil(self.plain as u128) as usize
    }

    /// Bytes needed to hold `blocks` ciphertext blocks
    pub fn cipher_len(&self, blocks: usize) -> usize {
        packed_len(blocks, self.cipher)
    }

    /// Bytes needed to hold `blocks` plaintext blocks
    pub fn plain_len(&self, blocks: usize) -> usize {
        packed_len(blocks, self.plain)
    }
}

fn packed_len(blocks: usize, width: u32) -> usize {
    (blocks as u128 * width as u128).div_ceil(8) as usize
}

/// Allocate a zero-filled buffer, reporting allocation failure as an error
pub fn zeroed_buffer(len: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| RsaError::OutOfMemory(len))?;
    buf.resize(len, 0);
    Ok(buf)
}

/// Encrypt `plaintext` with the public key into a frame
pub fn encrypt(plaintext: &[u8], key: &PublicKey) -> Result<Frame> {
    let widths = BlockWidths::for_modulus(key.n)?;
    let blocks = widths.block_count(plaintext.len());

    let mut reader = BitCursor::new(plaintext);
    let mut writer = BitCursor::new(zeroed_buffer(widths.cipher_len(blocks))?);

    for _ in 0..blocks {
        let block = reader.read(widths.plain);
        writer.write(widths.cipher, modexp(block, key.e, key.n))?;
    }

    Ok(Frame {
        original_length: plaintext.len() as u64,
        payload: writer.into_inner(),
    })
}

/// Decrypt a frame with the private key, returning exactly
/// `frame.original_length` bytes
pub fn decrypt(frame: &Frame, key: &PrivateKey) -> Result<Vec<u8>> {
    let widths = BlockWidths::for_modulus(key.n)?;
    frame.check_length(widths.plain)?;

    let original_length = usize::try_from(frame.original_length).map_err(|_| {
        RsaError::CorruptedFile(format!(
            "recorded length {} exceeds addressable memory",
            frame.original_length
        ))
    })?;
    let blocks = widths.block_count(original_length);

    let mut reader = BitCursor::new(&frame.payload[..]);
    let mut writer = BitCursor::new(zeroed_buffer(widths.plain_len(blocks))?);

    for _ in 0..blocks {
        let block = reader.read(widths.cipher);
        writer.write(widths.plain, modexp(block, key.d, key.n))?;
    }

    // The last block may carry padding bits past the original end
    let mut plaintext = writer.into_inner();
    plaintext.truncate(original_length);
    Ok(plaintext)
}
