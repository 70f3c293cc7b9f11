use thiserror::Error;

use crate::errors::AppError;

/// Authentication failure taxonomy. The first two arise while issuing
/// a credential, the rest while verifying one. Every variant is
/// terminal for the current request; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Unknown identifier, wrong secret, or disabled account. One
    /// variant for all three so callers cannot enumerate users.
    #[error("invalid identifier or secret")]
    InvalidCredentials,

    /// The user store did not answer within the configured deadline.
    #[error("user store unavailable")]
    ServiceUnavailable,

    /// No Authorization header, or not in `Bearer <token>` shape.
    #[error("missing bearer credential")]
    MissingCredential,

    /// Token present but corrupted or carrying a bad signature.
    #[error("invalid bearer credential")]
    InvalidCredential,

    /// Signature checks out but the credential is past its expiry.
    #[error("expired bearer credential")]
    ExpiredCredential,
}

// Clients get a uniform message per failure class; the concrete
// variant is only written to the logs where the error is handled.
impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                AppError::Unauthorized("invalid credentials".to_string())
            }
            AuthError::ServiceUnavailable => {
                AppError::ServiceUnavailable("try again later".to_string())
            }
            AuthError::MissingCredential
            | AuthError::InvalidCredential
            | AuthError::ExpiredCredential => AppError::Unauthorized("unauthorized".to_string()),
        }
    }
}
