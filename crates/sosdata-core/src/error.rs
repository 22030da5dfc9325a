// crates/sosdata-core/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars operation failed: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Data processing error: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
