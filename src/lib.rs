pub mod apportion;
pub mod formats;
pub mod model;
pub mod report;
pub mod util;

#[derive(Debug, thiserror::Error)]
pub enum ApportionError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Malformed data: {0}")]
    MalformedData(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApportionError>;
