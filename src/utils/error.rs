use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordsError {
    #[error("A student with email {0} is already registered")]
    DuplicateEmail(String),

    #[error("No matching student or subject")]
    NotFound,

    #[error("Incorrect password")]
    InvalidCredential,

    #[error("Students are allowed to enrol in 4 subjects only")]
    EnrollmentLimitReached,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RecordsError>;
