use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RollbookError {
    /// Bad login. Deliberately generic: callers must not learn whether the
    /// username or the password was the wrong half.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("No credential record found")]
    MissingCredential,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, RollbookError>;
