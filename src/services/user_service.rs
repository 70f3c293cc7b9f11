use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use validator::Validate;

use crate::{
    auth::AuthError,
    errors::{AppError, AppResult},
    models::{
        domain::User,
        dto::{request::RegisterRequest, response::UserDto},
    },
    repositories::UserRepository,
};

/// Account half of the credential issuer: provisions users and checks
/// login secrets. The store lookup is the only call here that can
/// block, so it runs under a deadline; past it the issuer fails
/// instead of hanging the caller.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    store_timeout: Duration,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>, store_timeout: Duration) -> Self {
        Self {
            repository,
            store_timeout,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<UserDto> {
        request.validate()?;
        request.validate_identifier()?;

        if self
            .repository
            .find_by_username(&request.identifier)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(format!(
                "User with username '{}' already exists",
                request.identifier
            )));
        }

        let secret_hash = bcrypt::hash(&request.secret, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::InternalError(format!("Failed to hash secret: {}", e)))?;

        let user = User::new(&request.identifier, &request.display_name, &secret_hash);
        let created = self.repository.create(user).await?;

        log::info!("registered user {}", created.username);
        Ok(created.into())
    }

    /// Validates a login attempt. Unknown identifier, wrong secret,
    /// and disabled account are deliberately indistinguishable to the
    /// caller; bcrypt's verify compares in constant time.
    pub async fn authenticate(&self, identifier: &str, secret: &str) -> Result<User, AuthError> {
        if identifier.is_empty() || secret.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        let user = match timeout(
            self.store_timeout,
            self.repository.find_by_username(identifier),
        )
        .await
        {
            Err(_) => {
                log::warn!("user store lookup timed out after {:?}", self.store_timeout);
                return Err(AuthError::ServiceUnavailable);
            }
            Ok(Err(e)) => {
                log::error!("user store lookup failed: {}", e);
                return Err(AuthError::ServiceUnavailable);
            }
            Ok(Ok(None)) => return Err(AuthError::InvalidCredentials),
            Ok(Ok(Some(user))) => user,
        };

        let secret_ok = bcrypt::verify(secret, &user.secret_hash).unwrap_or(false);
        if !secret_ok || user.disabled {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }
}
