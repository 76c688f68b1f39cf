use crate::arith::Word;
use crate::error::Result;
use crate::file::read_file;
use crate::frame::Frame;
use crate::transcode::BlockWidths;
use std::path::Path;

/// Describe an encrypted file
/// With a modulus, also reports the block layout and the length check
pub fn show_info(path: &Path, modulus: Option<Word>) -> Result<String> {
    let data = read_file(path)?;
    let frame = Frame::from_bytes(&data)?;

    let mut output = String::new();

    output.push_str("RSA Encrypted File Information\n");
    output.push_str("==============================\n\n");

    output.push_str(&format!("File: {}\n", path.display()));
    output.push_str(&format!("Actual size: {}\n", format_size(data.len() as u64)));
    output.push_str(&format!(
        "Recorded length: {} bytes\n",
        frame.original_length
    ));
    output.push_str(&format!(
        "Payload: {} bytes ({} bits)\n",
        frame.payload.len(),
        frame.payload.len() * 8
    ));
    output.push('\n');

    let n = match modulus {
        Some(n) => n,
        None => {
            output.push_str("Supply the modulus to check the block layout.\n");
            return Ok(output);
        }
    };

    let widths = BlockWidths::for_modulus(n)?;
    let blocks = usize::try_from(frame.original_length)
        .map(|len| widths.block_count(len))
        .ok();

    output.push_str("Block Layout:\n");
    output.push_str(&format!("  Modulus: {}\n", n));
    output.push_str(&format!("  Plaintext block: {} bits\n", widths.plain));
    output.push_str(&format!("  Ciphertext block: {} bits\n", widths.cipher));
    match blocks {
        Some(blocks) => {
            output.push_str(&format!("  Blocks: {}\n", blocks));
            output.push_str(&format!(
                "  Expected payload: {} bytes\n",
                widths.cipher_len(blocks)
            ));
        }
        None => output.push_str("  Blocks: recorded length is not addressable\n"),
    }
    output.push('\n');

    output.push_str("Length Check:\n");
    output.push_str(&format!(
        "  Drift: {} bytes (limit {})\n",
        frame.length_drift(),
        frame.max_drift(widths.plain)
    ));
    let verdict = match frame.check_length(widths.plain) {
        Ok(()) => "passed".to_string(),
        Err(e) => format!("FAILED ({})", e),
    };
    output.push_str(&format!("  Result: {}\n", verdict));

    Ok(output)
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}
