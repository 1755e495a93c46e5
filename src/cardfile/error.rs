use crate::model::ContactId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardfileError {
    #[error("Contact not found: #{0}")]
    ContactNotFound(ContactId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Input error: {0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, CardfileError>;
