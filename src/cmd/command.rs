//! Input-line parsing into the closed command set.

use crate::error::{CommandError, CommandResult};

/// One fully-parsed input line. Produced fresh per line and consumed by a
/// single dispatch; carries no state beyond its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Up,
    Cd(String),
    Ls,
    Cat(String),
    Add(String),
    Rename(String, String),
    Copy(String, String),
    Move(String, String),
    Remove(String),
    Os(OsFlag),
    Hash(String),
    Compress(String),
    Decompress(String),
    Exit,
}

/// Sub-flags accepted by the `os` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFlag {
    Eol,
    Cpus,
    Homedir,
    Username,
    Architecture,
}

impl OsFlag {
    fn from_token(token: &str) -> CommandResult<Self> {
        match token {
            "--EOL" => Ok(OsFlag::Eol),
            "--cpus" => Ok(OsFlag::Cpus),
            "--homedir" => Ok(OsFlag::Homedir),
            "--username" => Ok(OsFlag::Username),
            "--architecture" => Ok(OsFlag::Architecture),
            _ => Err(CommandError::InvalidInput),
        }
    }
}

/// Parse one input line into a [`Command`].
///
/// Lines split on single spaces: the first token is the command name, the
/// rest are positional arguments. No quoting, escaping, or multi-space
/// collapsing is supported. A missing or empty required argument, an
/// unknown command name, or an unknown `os` flag parses to `Invalid input`
/// before any filesystem work happens. Surplus tokens are ignored.
pub fn parse(line: &str) -> CommandResult<Command> {
    let mut tokens = line.split(' ');
    let name = tokens.next().unwrap_or("");
    let args: Vec<&str> = tokens.collect();

    match name {
        "up" => Ok(Command::Up),
        "cd" => Ok(Command::Cd(required(&args, 0)?)),
        "ls" => Ok(Command::Ls),
        "cat" => Ok(Command::Cat(required(&args, 0)?)),
        "add" => Ok(Command::Add(required(&args, 0)?)),
        "rn" => Ok(Command::Rename(required(&args, 0)?, required(&args, 1)?)),
        "cp" => Ok(Command::Copy(required(&args, 0)?, required(&args, 1)?)),
        "mv" => Ok(Command::Move(required(&args, 0)?, required(&args, 1)?)),
        "rm" => Ok(Command::Remove(required(&args, 0)?)),
        "os" => Ok(Command::Os(OsFlag::from_token(&required(&args, 0)?)?)),
        "hash" => Ok(Command::Hash(required(&args, 0)?)),
        "compress" => Ok(Command::Compress(required(&args, 0)?)),
        "decompress" => Ok(Command::Decompress(required(&args, 0)?)),
        ".exit" => Ok(Command::Exit),
        _ => Err(CommandError::InvalidInput),
    }
}

fn required(args: &[&str], index: usize) -> CommandResult<String> {
    match args.get(index) {
        Some(value) if !value.is_empty() => Ok((*value).to_string()),
        _ => Err(CommandError::InvalidInput),
    }
}
