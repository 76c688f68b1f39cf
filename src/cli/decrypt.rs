use crate::cli::encrypt::TranscodeSummary;
use crate::error::Result;
use crate::file::{read_file, write_file, WriteMode};
use crate::frame::Frame;
use crate::keygen::PrivateKey;
use crate::transcode::{decrypt, BlockWidths};
use std::path::Path;

/// Options for the decrypt command
#[derive(Debug, Clone, Default)]
pub struct DecryptOptions {
    pub write_mode: WriteMode,
}

/// Decrypt a file in place with the private key
/// The file is rewritten with exactly the recorded original length
pub fn decrypt_file(
    path: &Path,
    key: &PrivateKey,
    options: &DecryptOptions,
) -> Result<TranscodeSummary> {
    let encrypted = read_file(path)?;
    let frame = Frame::from_bytes(&encrypted)?;

    let plaintext = decrypt(&frame, key)?;
    let blocks = BlockWidths::for_modulus(key.n)?.block_count(plaintext.len());
    write_file(path, &plaintext, options.write_mode)?;

    Ok(TranscodeSummary {
        input_bytes: encrypted.len(),
        output_bytes: plaintext.len(),
        blocks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::encrypt::{encrypt_file, EncryptOptions};
    use crate::error::RsaError;
    use crate::keygen::generate_keys;
    use tempfile::tempdir;

    #[test]
    fn test_decrypt_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");
        let original: Vec<u8> = (0..2000).map(|i| ((i * 7 + 13) % 256) as u8).collect();
        std::fs::write(&path, &original).unwrap();

        let keys = generate_keys(251, 241).unwrap();
        encrypt_file(&path, &keys.public, &EncryptOptions::default()).unwrap();
        assert_ne!(std::fs::read(&path).unwrap(), original);

        let summary = decrypt_file(&path, &keys.private, &DecryptOptions::default()).unwrap();
        assert_eq!(summary.output_bytes, original.len());
        assert_eq!(std::fs::read(&path).unwrap(), original);
    }

    #[test]
    fn test_decrypt_roundtrip_atomic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"atomic replacement keeps the original until done").unwrap();

        let keys = generate_keys(61, 53).unwrap();
        let encrypt_options = EncryptOptions {
            write_mode: WriteMode::Atomic,
        };
        let decrypt_options = DecryptOptions {
            write_mode: WriteMode::Atomic,
        };
        encrypt_file(&path, &keys.public, &encrypt_options).unwrap();
        decrypt_file(&path, &keys.private, &decrypt_options).unwrap();

        assert_eq!(
            std::fs::read(&path).unwrap(),
            b"atomic replacement keeps the original until done"
        );
    }

    #[test]
    fn test_decrypt_truncated_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("short.bin");
        std::fs::write(&path, [1u8, 2, 3]).unwrap();

        let key = PrivateKey { d: 27, n: 55 };
        let result = decrypt_file(&path, &key, &DecryptOptions::default());
        assert!(matches!(result, Err(RsaError::CorruptedFile(_))));
        // the file is left untouched
        assert_eq!(std::fs::read(&path).unwrap(), vec![1u8, 2, 3]);
    }

    #[test]
    fn test_decrypt_tampered_length_field() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tampered.bin");
        std::fs::write(&path, vec![0x5Au8; 300]).unwrap();

        let keys = generate_keys(5, 11).unwrap();
        encrypt_file(&path, &keys.public, &EncryptOptions::default()).unwrap();

        let mut stored = std::fs::read(&path).unwrap();
        stored[..8].copy_from_slice(&5000u64.to_le_bytes());
        std::fs::write(&path, &stored).unwrap();

        let result = decrypt_file(&path, &keys.private, &DecryptOptions::default());
        assert!(matches!(result, Err(RsaError::CorruptedFile(_))));
        assert_eq!(std::fs::read(&path).unwrap(), stored);
    }
}
