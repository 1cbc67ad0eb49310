use thiserror::Error;

pub type Result<T> = std::result::Result<T, CardEmailError>;

#[derive(Error, Debug)]
pub enum CardEmailError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown email type: {0}")]
    UnknownEmailType(String),
}
