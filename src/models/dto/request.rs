use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::Deserialize;
use validator::Validate;

use crate::errors::{AppError, AppResult};

static IDENTIFIER_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[a-zA-Z0-9_]+$").expect("IDENTIFIER_REGEX is a valid regex pattern")
});

const MAX_ANSWERS: usize = 32;
const MAX_ANSWER_KEY_LEN: usize = 64;
const MAX_ANSWER_VALUE_LEN: usize = 500;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 50, message = "identifier is required"))]
    pub identifier: String,

    #[validate(length(min = 1, max = 128, message = "secret is required"))]
    pub secret: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50, message = "identifier must be 3-50 characters"))]
    pub identifier: String,

    #[validate(length(min = 8, max = 128, message = "secret must be 8-128 characters"))]
    pub secret: String,

    #[validate(length(min = 1, max = 100))]
    pub display_name: String,
}

impl RegisterRequest {
    /// Charset check on top of the derive-level length rules.
    pub fn validate_identifier(&self) -> AppResult<()> {
        if !IDENTIFIER_REGEX.is_match(&self.identifier) {
            return Err(AppError::ValidationError(
                "identifier must be alphanumeric with underscores".to_string(),
            ));
        }
        Ok(())
    }
}

/// Questionnaire submission: a flat question-key to answer-value map.
/// Checked once here at the boundary; whether the key set matches the
/// questionnaire is the match engine's call.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitQuizRequest {
    pub answers: BTreeMap<String, String>,
}

impl SubmitQuizRequest {
    pub fn validate(&self) -> AppResult<()> {
        if self.answers.is_empty() {
            return Err(AppError::ValidationError(
                "answers must not be empty".to_string(),
            ));
        }
        if self.answers.len() > MAX_ANSWERS {
            return Err(AppError::ValidationError(format!(
                "too many answers (max {})",
                MAX_ANSWERS
            )));
        }
        for (key, value) in &self.answers {
            if key.trim().is_empty() || key.len() > MAX_ANSWER_KEY_LEN {
                return Err(AppError::ValidationError(
                    "answer keys must be non-empty".to_string(),
                ));
            }
            if value.trim().is_empty() || value.len() > MAX_ANSWER_VALUE_LEN {
                return Err(AppError::ValidationError(format!(
                    "answer for '{}' must be non-empty",
                    key
                )));
            }
        }
        Ok(())
    }
}
