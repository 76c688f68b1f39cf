use crate::error::{Result, RsaError};

/// Extra bytes of length drift tolerated on decrypt, on top of the one bit
/// per plaintext block that encryption adds
pub const LENGTH_SLACK: u64 = 8;

/// An encrypted file: the plaintext length followed by packed ciphertext
/// Layout: [original_length: 8, little-endian][payload...]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Exact byte count of the plaintext; decryption truncates to this
    pub original_length: u64,
    /// Ciphertext blocks, bit-packed
    pub payload: Vec<u8>,
}

impl Frame {
    /// Length prefix size in bytes
    pub const HEADER_SIZE: usize = 8;

    /// Serialize to bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::HEADER_SIZE + self.payload.len());
        buf.extend_from_slice(&self.original_length.to_le_bytes());
        buf.extend_from_slice(&self.payload);
        buf
    }

    /// Deserialize from the full contents of an encrypted file
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < Self::HEADER_SIZE {
            return Err(RsaError::CorruptedFile(format!(
                "{} bytes is too short for the length header",
                data.len()
            )));
        }
        let (header, payload) = data.split_at(Self::HEADER_SIZE);
        let mut length_bytes = [0u8; Self::HEADER_SIZE];
        length_bytes.copy_from_slice(header);

        Ok(Self {
            original_length: u64::from_le_bytes(length_bytes),
            payload: payload.to_vec(),
        })
    }

    /// Signed difference between the recorded length and the payload size
    pub fn length_drift(&self) -> i128 {
        self.original_length as i128 - self.payload.len() as i128
    }

    /// Largest drift a genuine frame can show for the given plaintext block width
    pub fn max_drift(&self, plain_bits: u32) -> i128 {
        (self.original_length / plain_bits.max(1) as u64) as i128 + 1 + LENGTH_SLACK as i128
    }

    /// Check that the recorded length is plausible for the payload
    pub fn check_length(&self, plain_bits: u32) -> Result<()> {
        let drift = self.length_drift();
        let max = self.max_drift(plain_bits);
        if drift.abs() > max {
            return Err(RsaError::CorruptedFile(format!(
                "recorded length {} does not match {} payload bytes",
                self.original_length,
                self.payload.len()
            )));
        }
        Ok(())
    }
}
