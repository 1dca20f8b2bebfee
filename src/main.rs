use clap::Parser;
use fileman::cli::Args;
use fileman::session::Session;
use fileman::{conf, control};
use std::error::Error;

/// Entry point that builds the session and starts the control loop.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config = conf::load();

    let home = dirs::home_dir().ok_or("unable to determine the home directory")?;
    let session = Session::new(args.username, home);

    control::control_loop(session, &config)
}
