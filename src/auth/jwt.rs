use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::{claims::Claims, error::AuthError},
    errors::{AppError, AppResult},
    models::domain::User,
};

/// Issues and verifies self-contained bearer credentials. Verification
/// needs only the signing key: no store lookup, no shared mutable
/// state, safe to call concurrently from any number of requests.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration_hours: i64,
}

impl JwtService {
    pub fn new(secret: &SecretString, expiration_hours: i64) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        // A credential is valid strictly before its exp timestamp, so
        // the default decode leeway is switched off.
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation,
            expiration_hours,
        }
    }

    pub fn create_token(&self, user: &User) -> AppResult<String> {
        self.create_token_with_ttl(&user.username, self.expiration_hours)
    }

    pub fn create_token_with_ttl(&self, subject: &str, ttl_hours: i64) -> AppResult<String> {
        let claims = Claims::new(subject, ttl_hours);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to create JWT: {}", e)))
    }

    /// Full verification gate for a raw `Authorization` header value.
    /// Pure and side-effect-free; never touches the user store.
    pub fn authenticate(&self, raw_header: Option<&str>) -> Result<Claims, AuthError> {
        let header = raw_header.ok_or(AuthError::MissingCredential)?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingCredential)?;

        self.verify_token(token)
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::ExpiredCredential,
                _ => AuthError::InvalidCredential,
            })
    }
}
