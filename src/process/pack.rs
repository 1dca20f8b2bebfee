//! Streaming file compression and decompression.

use crate::error::{CommandError, CommandResult};
use crate::session::Session;
use lz4_flex::frame::{Error as Lz4FrameError, FrameDecoder, FrameEncoder};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionAlgorithm {
    Lz4,
}

impl CompressionAlgorithm {
    pub fn default() -> Self {
        CompressionAlgorithm::Lz4
    }

    /// Suffix appended to compressed output and required by `decompress`.
    pub fn extension(self) -> &'static str {
        match self {
            CompressionAlgorithm::Lz4 => "lz4",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "lz4" => Some(CompressionAlgorithm::Lz4),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("compression I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("compression frame error: {0}")]
    Frame(#[from] Lz4FrameError),
}

impl From<CompressionError> for CommandError {
    fn from(err: CompressionError) -> Self {
        match err {
            CompressionError::Io(err) => CommandError::OperationFailed(err),
            CompressionError::Frame(err) => CommandError::OperationFailed(io::Error::other(err)),
        }
    }
}

/// Compress a regular file into `<cwd>/<basename>.<ext>`. The output always
/// lands in the current directory, regardless of where the source lives.
pub fn compress(
    session: &Session,
    file: &str,
    algorithm: CompressionAlgorithm,
    out: &mut dyn Write,
) -> CommandResult<()> {
    let source = session.resolve(file);
    let meta = fs::metadata(&source)?;
    if !meta.is_file() {
        return Err(CommandError::InvalidInput);
    }

    let base_name = source
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or(CommandError::InvalidInput)?;
    let destination = session
        .current_dir()
        .join(format!("{}.{}", base_name, algorithm.extension()));

    encode_file(&source, &destination, algorithm)?;
    writeln!(out, "File compressed successfully")?;
    Ok(())
}

/// Decompress a `<name>.<ext>` file into `<cwd>/<name>`. The suffix
/// contract is checked before any filesystem access, so a wrong suffix is
/// invalid input whether or not the file exists.
pub fn decompress(
    session: &Session,
    file: &str,
    algorithm: CompressionAlgorithm,
    out: &mut dyn Write,
) -> CommandResult<()> {
    let suffix = format!(".{}", algorithm.extension());
    let base_name = Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or(CommandError::InvalidInput)?;
    let stem = base_name
        .strip_suffix(&suffix)
        .filter(|stem| !stem.is_empty())
        .ok_or(CommandError::InvalidInput)?;

    let source = session.resolve(file);
    let meta = fs::metadata(&source)?;
    if !meta.is_file() {
        return Err(CommandError::InvalidInput);
    }

    let destination = session.current_dir().join(stem);
    decode_file(&source, &destination, algorithm)?;
    writeln!(out, "File decompressed successfully")?;
    Ok(())
}

fn encode_file(
    source: &Path,
    destination: &Path,
    algorithm: CompressionAlgorithm,
) -> Result<(), CompressionError> {
    match algorithm {
        CompressionAlgorithm::Lz4 => {
            let mut reader = File::open(source)?;
            let writer = File::create(destination)?;
            let mut encoder = FrameEncoder::new(writer);
            io::copy(&mut reader, &mut encoder)?;
            encoder.finish()?;
            Ok(())
        }
    }
}

fn decode_file(
    source: &Path,
    destination: &Path,
    algorithm: CompressionAlgorithm,
) -> Result<(), CompressionError> {
    match algorithm {
        CompressionAlgorithm::Lz4 => {
            let reader = File::open(source)?;
            let mut decoder = FrameDecoder::new(reader);
            let mut writer = File::create(destination)?;
            io::copy(&mut decoder, &mut writer)?;
            writer.flush()?;
            Ok(())
        }
    }
}
