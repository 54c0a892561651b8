use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdbookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, AdbookError>;
