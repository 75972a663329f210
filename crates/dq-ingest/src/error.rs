use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv input needs a header row and at least one data row")]
    NoData,
}

pub type Result<T> = std::result::Result<T, IngestError>;
