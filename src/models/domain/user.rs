use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored account record. `secret_hash` is a bcrypt digest and is only
/// ever compared against, never returned through the API (the DTO
/// layer owns the public shape).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub username: String,
    pub display_name: String,
    pub secret_hash: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(username: &str, display_name: &str, secret_hash: &str) -> Self {
        User {
            username: username.to_string(),
            display_name: display_name.to_string(),
            secret_hash: secret_hash.to_string(),
            disabled: false,
            created_at: Some(Utc::now()),
        }
    }
}
