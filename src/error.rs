use thiserror::Error;

pub type BevResult<T> = Result<T, BevError>;

#[derive(Error, Debug)]
pub enum BevError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Validation error: {0}")]
    Validation(String),
}
