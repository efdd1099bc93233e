//! Use-case functions sitting between the routes and the repository.

use thiserror::Error;
use validator::ValidationErrors;

use crate::repository::errors::RepositoryError;

pub mod client;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The supplied identifier was zero or negative.
    #[error("Invalid identifier")]
    InvalidId,

    /// The referenced record does not exist.
    #[error("Entity not found")]
    NotFound,

    /// Required form fields were missing or empty.
    #[error("Form validation failed")]
    Validation(ValidationErrors),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
