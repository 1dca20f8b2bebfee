use crate::error::CommandResult;
use crate::session::Session;
use std::io::Write;

/// Print the startup banner: greeting plus the starting location.
pub fn welcome(session: &Session, out: &mut dyn Write) -> CommandResult<()> {
    writeln!(
        out,
        "Welcome to the File Manager, {}!",
        session.username()
    )?;
    writeln!(
        out,
        "You are currently in {}",
        session.current_dir().display()
    )?;
    Ok(())
}

/// Print the farewell line addressed to the session user.
pub fn farewell(session: &Session, out: &mut dyn Write) -> CommandResult<()> {
    writeln!(
        out,
        "Thank you for using File Manager, {}, goodbye!",
        session.username()
    )?;
    Ok(())
}
