use thiserror::Error;

/// Errors raised while directing a build.
///
/// Building steps themselves never fail; only the director and the recipe
/// loader can.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("invalid director state: {0}")]
    InvalidState(&'static str),

    #[error("failed to parse recipe: {0}")]
    Recipe(#[from] toml::de::Error),
}

impl BuildError {
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, BuildError::InvalidState(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_state_message() {
        let err = BuildError::InvalidState("no builder attached");
        assert_eq!(err.to_string(), "invalid director state: no builder attached");
        assert!(err.is_invalid_state());
    }

    #[test]
    fn test_recipe_error_converts_from_toml() {
        let toml_err = toml::from_str::<toml::Value>("name = ").unwrap_err();
        let err: BuildError = toml_err.into();
        assert!(!err.is_invalid_state());
        assert!(err.to_string().starts_with("failed to parse recipe:"));
    }
}
