use crate::error::Result;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// How a transcoded file replaces the original
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Truncate and rewrite the file itself. A failure mid-write leaves a
    /// truncated file behind.
    #[default]
    InPlace,
    /// Write a temporary file next to the original and rename it over the
    /// original once complete
    Atomic,
}

/// Read a whole file into memory
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    Ok(std::fs::read(path)?)
}

/// Replace the contents of an existing file
pub fn write_file(path: &Path, data: &[u8], mode: WriteMode) -> Result<()> {
    match mode {
        WriteMode::InPlace => {
            let file = OpenOptions::new().write(true).truncate(true).open(path)?;
            let mut writer = BufWriter::new(file);
            writer.write_all(data)?;
            writer.flush()?;
        }
        WriteMode::Atomic => {
            // Replace the symlink target, not the link, and keep its mode
            let target = fs::canonicalize(path)?;
            let permissions = fs::metadata(&target)?.permissions();
            let dir = target.parent().unwrap_or_else(|| Path::new("/"));

            let mut temp = NamedTempFile::new_in(dir)?;
            temp.write_all(data)?;
            temp.as_file().set_permissions(permissions)?;
            temp.as_file().sync_all()?;
            temp.persist(&target)?;
        }
    }
    Ok(())
}
