//! A second builder over the same steps, producing something that is not a
//! `Product` at all: numbered assembly instructions.

use crate::builder::{PartBuilder, PART_A, PART_B, PART_C};
use std::fmt;
use tracing::trace;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manual {
    instructions: Vec<String>,
}

impl Manual {
    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// One numbered line per instruction.
    pub fn render(&self) -> String {
        self.instructions
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{}. {}\n", i + 1, line))
            .collect()
    }
}

impl fmt::Display for Manual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[derive(Debug, Default)]
pub struct ManualBuilder {
    manual: Manual,
}

impl ManualBuilder {
    pub fn new() -> Self {
        ManualBuilder::default()
    }

    pub fn reset(&mut self) {
        self.manual = Manual::default();
    }

    pub fn manual(&self) -> &Manual {
        &self.manual
    }

    #[must_use = "the assembled manual is dropped if unused"]
    pub fn get_manual(&mut self) -> Manual {
        std::mem::take(&mut self.manual)
    }

    fn document(&mut self, part: &str) -> &mut dyn PartBuilder {
        let step = self.manual.instructions.len() + 1;
        trace!(part, step, "documenting part");
        self.manual.instructions.push(format!("Install {part}"));
        self
    }
}

impl PartBuilder for ManualBuilder {
    fn build_part_a(&mut self) -> &mut dyn PartBuilder {
        self.document(PART_A)
    }

    fn build_part_b(&mut self) -> &mut dyn PartBuilder {
        self.document(PART_B)
    }

    fn build_part_c(&mut self) -> &mut dyn PartBuilder {
        self.document(PART_C)
    }
}
