//! Command-line tokenization and parsing.

pub mod command;

pub use command::{Command, OsFlag, parse};
