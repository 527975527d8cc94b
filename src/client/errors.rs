//! Client error types

use thiserror::Error;

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Form input rejected before any request is sent
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Product name is required")]
    EmptyName,

    #[error("Quantity must be greater than or equal to zero")]
    NegativeQuantity,

    #[error("Price must be greater than or equal to zero")]
    NegativePrice,
}

/// Client errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response, or the body did not decode
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with an error status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Local form validation failed
    #[error("{0}")]
    Form(#[from] FormError),
}

impl ClientError {
    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
