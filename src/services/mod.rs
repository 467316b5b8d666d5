use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

pub mod auth;
pub mod cliente;
pub mod produto;
pub mod referencia;
pub mod registro_tempo;
pub mod tarefa;
pub mod usuario;

/// Errors surfaced by the service layer, already shaped for the handlers:
/// `Unauthorized` becomes 401, `NotFound` 404, `Validation` 400 and
/// everything else a logged 500.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Não autorizado")]
    Unauthorized,

    #[error("Não encontrado")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ValidationError(msg)
            | RepositoryError::ConstraintViolation(msg) => ServiceError::Validation(msg),
            other => ServiceError::Repository(other),
        }
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
