use serde::{Deserialize, Serialize};

/// One entry in the match catalog, and the shape a successful
/// submission resolves to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Persona {
    pub name: String,
    pub personality: String,
    pub url: String,
}

impl Persona {
    pub fn new(name: &str, personality: &str, url: &str) -> Self {
        Persona {
            name: name.to_string(),
            personality: personality.to_string(),
            url: url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_creation() {
        let persona = Persona::new(
            "Trailblazer",
            "Bold and restless, happiest out in front",
            "https://example.com/personas/trailblazer",
        );

        assert_eq!(persona.name, "Trailblazer");
        assert!(!persona.personality.is_empty());
        assert!(persona.url.starts_with("https://"));
    }
}
