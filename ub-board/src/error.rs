use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Config error: {0}")]
    Config(#[from] ub_config::ConfigError),

    #[error("Terminal IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, BoardError>;
