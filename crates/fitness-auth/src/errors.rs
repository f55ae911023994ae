//! Authentication and authorization failures.
//!
//! Every variant is terminal for the request that produced it. All of them
//! answer 401 except [`AuthError::AccessDenied`] (403) and
//! [`AuthError::TokenCreation`] (500).

use fitness_core::AppError;
use thiserror::Error;

use crate::claims::Role;
use crate::policy::RequiredRole;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Missing authorization token")]
    MissingToken,
    #[error("Invalid authorization header format")]
    MalformedHeader,
    #[error("Invalid token signature")]
    InvalidSignature,
    #[error("Token has expired")]
    Expired,
    #[error("Invalid signing method")]
    WrongAlgorithm,
    #[error("Malformed token")]
    Malformed,
    #[error("Access denied. Required role: {required}, but caller has role: {role}")]
    AccessDenied { required: RequiredRole, role: Role },
    #[error("Credentials not found")]
    CredentialNotFound,
    #[error("Invalid credentials")]
    InvalidCredential,
    #[error("Failed to create token: {0}")]
    TokenCreation(String),
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::InvalidAlgorithm => AuthError::WrongAlgorithm,
            ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            ErrorKind::ExpiredSignature => AuthError::Expired,
            _ => AuthError::Malformed,
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AccessDenied { .. } => AppError::forbidden(err),
            AuthError::TokenCreation(_) => AppError::internal(err),
            _ => AppError::unauthorized(err),
        }
    }
}
