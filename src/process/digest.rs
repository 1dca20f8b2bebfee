//! SHA-256 file digests.

use crate::error::{CommandError, CommandResult};
use crate::session::Session;
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{self, Write};

/// Stream a regular file through SHA-256 and report the digest as a
/// lowercase hexadecimal string.
pub fn hash(session: &Session, file: &str, out: &mut dyn Write) -> CommandResult<()> {
    let resolved = session.resolve(file);
    let meta = fs::metadata(&resolved)?;
    if !meta.is_file() {
        return Err(CommandError::InvalidInput);
    }

    let mut reader = File::open(&resolved)?;
    let mut hasher = Sha256::new();
    io::copy(&mut reader, &mut hasher)?;

    writeln!(
        out,
        "The hash of the file is {}",
        hex::encode(hasher.finalize())
    )?;
    Ok(())
}
