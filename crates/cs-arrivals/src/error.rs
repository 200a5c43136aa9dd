use thiserror::Error;

use cs_core::CoreError;

#[derive(Debug, Error)]
pub enum ArrivalError {
    #[error("arrival parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ArrivalResult<T> = Result<T, ArrivalError>;
