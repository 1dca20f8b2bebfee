//! File content operations: read, create, rename, copy, move, delete.

use crate::error::{CommandError, CommandResult};
use crate::session::Session;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

/// Stream a regular file's raw bytes to the output channel, untransformed.
pub fn cat(session: &Session, file: &str, out: &mut dyn Write) -> CommandResult<()> {
    let resolved = session.resolve(file);
    let meta = fs::metadata(&resolved)?;
    if !meta.is_file() {
        return Err(CommandError::InvalidInput);
    }

    let mut reader = File::open(&resolved)?;
    io::copy(&mut reader, out)?;
    Ok(())
}

/// Create a new empty regular file. A pre-existing entry at the resolved
/// path is a host failure, not a silent truncation.
pub fn add(session: &Session, name: &str, out: &mut dyn Write) -> CommandResult<()> {
    let resolved = session.resolve(name);
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&resolved)?;

    writeln!(out, "File created successfully")?;
    Ok(())
}

/// Rename via a single atomic filesystem rename of the resolved source to
/// the resolved destination.
pub fn rename(
    session: &Session,
    file: &str,
    new_name: &str,
    out: &mut dyn Write,
) -> CommandResult<()> {
    let source = session.resolve(file);
    let destination = session.resolve(new_name);
    fs::rename(&source, &destination)?;

    writeln!(out, "File renamed successfully")?;
    Ok(())
}

/// Copy a regular file into an existing directory under its own base name.
pub fn copy(session: &Session, file: &str, dir: &str, out: &mut dyn Write) -> CommandResult<()> {
    copy_into_dir(session, file, dir)?;
    writeln!(out, "File copied successfully")?;
    Ok(())
}

/// Move a regular file into an existing directory: the copy stream drains
/// fully first, then the source is deleted. If the delete fails the copy
/// remains in place and the failure is reported; this non-atomic window is
/// accepted behavior.
pub fn r#move(session: &Session, file: &str, dir: &str, out: &mut dyn Write) -> CommandResult<()> {
    let source = copy_into_dir(session, file, dir)?;
    fs::remove_file(&source)?;

    writeln!(out, "File moved successfully")?;
    Ok(())
}

/// Remove the entry at the resolved path.
pub fn remove(session: &Session, file: &str, out: &mut dyn Write) -> CommandResult<()> {
    let resolved = session.resolve(file);
    fs::remove_file(&resolved)?;

    writeln!(out, "File deleted successfully")?;
    Ok(())
}

/// Validate source file and destination directory, then stream the bytes
/// into `<dir>/<basename>`. Returns the resolved source path so `move` can
/// delete it once the destination handle is closed.
fn copy_into_dir(session: &Session, file: &str, dir: &str) -> CommandResult<PathBuf> {
    let source = session.resolve(file);
    let source_meta = fs::metadata(&source)?;
    if !source_meta.is_file() {
        return Err(CommandError::InvalidInput);
    }

    let target_dir = session.resolve(dir);
    let dir_meta = fs::metadata(&target_dir)?;
    if !dir_meta.is_dir() {
        return Err(CommandError::InvalidInput);
    }

    let base_name = source.file_name().ok_or(CommandError::InvalidInput)?;
    let destination = target_dir.join(base_name);

    let mut reader = File::open(&source)?;
    let mut writer = File::create(&destination)?;
    io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    drop(writer);

    Ok(source)
}
