//! Top-level error type for the picker binary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("logger init: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type AppResult<T> = Result<T, AppError>;
