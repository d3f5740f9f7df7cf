use crate::builder::PartBuilder;
use crate::error::BuildError;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    PartA,
    PartB,
    PartC,
}

impl Step {
    pub fn apply(self, builder: &mut dyn PartBuilder) {
        match self {
            Step::PartA => builder.build_part_a(),
            Step::PartB => builder.build_part_b(),
            Step::PartC => builder.build_part_c(),
        };
    }
}

/// A named sequence of build steps for a `Director` to run.
///
/// Recipes can be written in TOML:
///
/// ```toml
/// name = "custom"
/// steps = ["part_a", "part_c"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Recipe {
    pub name: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, steps: impl IntoIterator<Item = Step>) -> Self {
        Recipe {
            name: name.into(),
            steps: steps.into_iter().collect(),
        }
    }

    pub fn minimal_viable() -> Self {
        Recipe::new("minimal_viable", [Step::PartA])
    }

    pub fn full_featured() -> Self {
        Recipe::new("full_featured", [Step::PartA, Step::PartB, Step::PartC])
    }

    pub fn from_toml_str(content: &str) -> Result<Self, BuildError> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply(&self, builder: &mut dyn PartBuilder) {
        for step in &self.steps {
            step.apply(builder);
        }
    }
}
