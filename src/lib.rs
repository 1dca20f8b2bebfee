pub mod cli;
pub mod cmd;
pub mod conf;
pub mod control;
pub mod error;
pub mod process;
pub mod session;
