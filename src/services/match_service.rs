use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};

use crate::{
    errors::{AppError, AppResult},
    models::domain::Persona,
};

/// Seam for the matching collaborator. The core hands over the
/// validated answers and the verified subject and gets a result back;
/// the algorithm behind the seam is its own concern.
pub trait MatchEngine: Send + Sync {
    fn evaluate(&self, answers: &BTreeMap<String, String>, subject: &str) -> AppResult<Persona>;
}

/// The questionnaire's fixed shape: a submission must answer exactly
/// these keys.
const QUESTION_KEYS: [&str; 2] = ["q1", "q2"];

static PERSONA_CATALOG: Lazy<Vec<Persona>> = Lazy::new(|| {
    vec![
        Persona::new(
            "Trailblazer",
            "Bold and restless, happiest out in front setting the pace",
            "https://quizmatch.example/personas/trailblazer",
        ),
        Persona::new(
            "Strategist",
            "Measured and deliberate, three moves ahead of the field",
            "https://quizmatch.example/personas/strategist",
        ),
        Persona::new(
            "Closer",
            "Quiet early, unstoppable when the finish comes into view",
            "https://quizmatch.example/personas/closer",
        ),
        Persona::new(
            "Spark",
            "Quick to start, quick to laugh, carries the whole room along",
            "https://quizmatch.example/personas/spark",
        ),
        Persona::new(
            "Anchor",
            "Steady under pressure, the one everyone else paces off",
            "https://quizmatch.example/personas/anchor",
        ),
        Persona::new(
            "Wanderer",
            "Takes the scenic route on purpose and finds things nobody else does",
            "https://quizmatch.example/personas/wanderer",
        ),
    ]
});

/// Default engine: a digest over the canonically ordered answers picks
/// from the static catalog, so the same answers always resolve to the
/// same persona.
pub struct PersonaMatcher;

impl PersonaMatcher {
    pub fn new() -> Self {
        PersonaMatcher
    }
}

impl Default for PersonaMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchEngine for PersonaMatcher {
    fn evaluate(&self, answers: &BTreeMap<String, String>, subject: &str) -> AppResult<Persona> {
        if answers.len() != QUESTION_KEYS.len() {
            return Err(AppError::ValidationError(format!(
                "expected answers for exactly {} questions",
                QUESTION_KEYS.len()
            )));
        }

        let mut hasher = Sha256::new();
        for key in QUESTION_KEYS {
            let value = answers.get(key).ok_or_else(|| {
                AppError::ValidationError(format!("missing answer for '{}'", key))
            })?;
            hasher.update(key.as_bytes());
            hasher.update([0x1f]);
            hasher.update(value.as_bytes());
            hasher.update([0x1e]);
        }
        let digest = hasher.finalize();

        let index = (digest[0] as usize) % PERSONA_CATALOG.len();
        let persona = PERSONA_CATALOG[index].clone();

        log::info!("matched subject {} to persona {}", subject, persona.name);
        Ok(persona)
    }
}
