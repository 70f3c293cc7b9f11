use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Persona, User};

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub username: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            username: user.username,
            display_name: user.display_name,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResponse {
    pub name: String,
    pub personality: String,
    pub url: String,
}

impl From<Persona> for MatchResponse {
    fn from(persona: Persona) -> Self {
        MatchResponse {
            name: persona.name,
            personality: persona.personality,
            url: persona.url,
        }
    }
}
