use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontError {
    #[error("Backend request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Backend returned HTTP status {status}")]
    StatusError { status: u16 },

    #[error("Response decode failed: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, FrontError>;
