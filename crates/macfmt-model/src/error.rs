use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacError {
    #[error("input is empty")]
    Empty,
    #[error("expected 12 hex digits, found {digits}")]
    InvalidLength { digits: usize },
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
    #[error("unknown format: {0}")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, MacError>;
