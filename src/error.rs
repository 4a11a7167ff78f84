use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A reservoir has to hold at least one record.
    #[error("sample size must be a positive integer, got {0}")]
    InvalidCapacity(usize),

    #[error("failed to read input")]
    Read(#[source] std::io::Error),

    #[error("failed to write sample")]
    Write(#[source] std::io::Error),

    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to install interrupt handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
