//! Operation handlers and the dispatch entry point.

pub mod digest;
pub mod file;
pub mod nav;
pub mod osinfo;
pub mod pack;
pub mod welcome;

use crate::cmd::Command;
use crate::error::CommandResult;
use self::pack::CompressionAlgorithm;
use crate::session::Session;
use std::io::Write;

/// Whether the control loop should keep prompting after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Execute one parsed command against the session, writing its outcome to
/// `out`. Every arm emits exactly one outcome (a message, a listing, or raw
/// file bytes) or returns an error the loop prints as the outcome line.
pub fn execute(
    session: &mut Session,
    command: Command,
    algorithm: CompressionAlgorithm,
    out: &mut dyn Write,
) -> CommandResult<Flow> {
    match command {
        Command::Up => nav::up(session, out)?,
        Command::Cd(dir) => nav::cd(session, &dir, out)?,
        Command::Ls => nav::ls(session, out)?,
        Command::Cat(file) => file::cat(session, &file, out)?,
        Command::Add(name) => file::add(session, &name, out)?,
        Command::Rename(file, new_name) => file::rename(session, &file, &new_name, out)?,
        Command::Copy(file, dir) => file::copy(session, &file, &dir, out)?,
        Command::Move(file, dir) => file::r#move(session, &file, &dir, out)?,
        Command::Remove(file) => file::remove(session, &file, out)?,
        Command::Os(flag) => osinfo::os_info(flag, out)?,
        Command::Hash(file) => digest::hash(session, &file, out)?,
        Command::Compress(file) => pack::compress(session, &file, algorithm, out)?,
        Command::Decompress(file) => pack::decompress(session, &file, algorithm, out)?,
        Command::Exit => {
            welcome::farewell(session, out)?;
            return Ok(Flow::Exit);
        }
    }

    Ok(Flow::Continue)
}
