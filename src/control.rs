use crate::cmd;
use crate::conf::ConfigurationModel;
use crate::process::pack::CompressionAlgorithm;
use crate::process::{self, Flow, welcome};
use crate::session::Session;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::error::Error;
use std::io::{self, Write};

const DEFAULT_PROMPT: &str = "> ";

/// Main command control loop: banner, then read-parse-execute one line at a
/// time until the exit command. One command runs at a time; the next read
/// does not begin until the previous command's streaming has fully drained.
pub fn control_loop(mut session: Session, config: &ConfigurationModel) -> Result<(), Box<dyn Error>> {
    let mut stdout = io::stdout();
    let mut rustyline = DefaultEditor::new()?;

    let prompt = config
        .ui
        .prompt
        .clone()
        .unwrap_or_else(|| DEFAULT_PROMPT.to_string());
    let algorithm = resolve_algorithm(config);

    welcome::welcome(&session, &mut stdout)?;

    loop {
        stdout.flush()?;

        match rustyline.readline(&prompt) {
            Ok(line) => {
                let outcome = cmd::parse(&line)
                    .and_then(|command| process::execute(&mut session, command, algorithm, &mut stdout));

                match outcome {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Exit) => return Ok(()),
                    // Both failure buckets surface as their terse outcome line.
                    Err(err) => writeln!(stdout, "{err}")?,
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                welcome::farewell(&session, &mut stdout)?;
                return Ok(());
            }
            Err(err) => {
                eprintln!("Error: {err:?}");
                return Err(Box::new(err));
            }
        }
    }
}

fn resolve_algorithm(config: &ConfigurationModel) -> CompressionAlgorithm {
    match config.pack.algorithm.as_deref() {
        Some(name) => CompressionAlgorithm::from_name(name).unwrap_or_else(|| {
            eprintln!("Warning: unknown compression algorithm '{name}', using lz4");
            CompressionAlgorithm::default()
        }),
        None => CompressionAlgorithm::default(),
    }
}
