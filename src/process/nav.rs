//! Cursor navigation and directory listing.

use crate::error::{CommandError, CommandResult};
use crate::session::Session;
use std::fs;
use std::io::Write;

/// Move the cursor to its parent directory. A cursor already at a
/// segment-less root stays put, silently; otherwise the new location is
/// reported.
pub fn up(session: &mut Session, out: &mut dyn Write) -> CommandResult<()> {
    let parent = match session.current_dir().parent() {
        Some(parent) => parent.to_path_buf(),
        None => return Ok(()),
    };

    session.set_current_dir(parent);
    report_location(session, out)
}

/// Move the cursor to `target`, which must resolve to an existing
/// directory. The cursor is only replaced after the target validates.
pub fn cd(session: &mut Session, target: &str, out: &mut dyn Write) -> CommandResult<()> {
    let resolved = session.resolve(target);
    let meta = fs::metadata(&resolved)?;
    if !meta.is_dir() {
        return Err(CommandError::InvalidInput);
    }

    session.set_current_dir(resolved);
    report_location(session, out)
}

/// List the cursor directory, one line per entry, sorted lexicographically
/// and tagged `[dir]` or `[file]` from a per-entry stat.
pub fn ls(session: &Session, out: &mut dyn Write) -> CommandResult<()> {
    let mut names: Vec<String> = Vec::new();
    for entry in fs::read_dir(session.current_dir())? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    for name in names {
        let meta = fs::metadata(session.current_dir().join(&name))?;
        if meta.is_dir() {
            writeln!(out, "{name}/\t[dir]")?;
        } else {
            writeln!(out, "{name}\t[file]")?;
        }
    }

    Ok(())
}

fn report_location(session: &Session, out: &mut dyn Write) -> CommandResult<()> {
    writeln!(
        out,
        "You are currently in {}",
        session.current_dir().display()
    )?;
    Ok(())
}
