pub mod cli;
pub mod command;
pub mod error;
pub mod logger;
pub mod shell;

#[cfg(test)]
mod tests;

pub use error::{BoardError, Result};
pub use shell::Shell;
