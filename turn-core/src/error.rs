use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Validator error: {0}")]
    Validator(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PromptError>;
