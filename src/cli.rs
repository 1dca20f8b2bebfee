//! CLI argument parsing via clap.

use clap::Parser;

/// An interactive file-navigation shell.
#[derive(Debug, Parser)]
#[command(name = "fileman", version)]
pub struct Args {
    /// Display name used in the greeting and farewell lines.
    #[arg(long = "username")]
    pub username: String,
}
