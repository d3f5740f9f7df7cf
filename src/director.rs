use crate::builder::PartBuilder;
use crate::error::BuildError;
use crate::recipe::Recipe;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::debug;

/// Runs fixed step sequences against whichever builder it is pointed at.
///
/// The director never owns the builder, and never sees the product. It keeps
/// a `Weak` handle, so the client stays in charge of the builder's lifetime
/// and can retrieve the product between runs.
#[derive(Default)]
pub struct Director {
    builder: Option<Weak<RefCell<dyn PartBuilder>>>,
}

impl Director {
    pub fn new() -> Self {
        Director::default()
    }

    pub fn set_builder<B>(&mut self, builder: &Rc<RefCell<B>>)
    where
        B: PartBuilder + 'static,
    {
        let handle: Weak<RefCell<B>> = Rc::downgrade(builder);
        self.builder = Some(handle);
    }

    /// True while a builder is attached and still alive.
    pub fn has_builder(&self) -> bool {
        self.builder
            .as_ref()
            .is_some_and(|handle| handle.strong_count() > 0)
    }

    pub fn build_minimal_viable_product(&self) -> Result<(), BuildError> {
        self.construct(&Recipe::minimal_viable())
    }

    pub fn build_full_featured_product(&self) -> Result<(), BuildError> {
        self.construct(&Recipe::full_featured())
    }

    pub fn construct(&self, recipe: &Recipe) -> Result<(), BuildError> {
        let builder = self
            .builder
            .as_ref()
            .ok_or(BuildError::InvalidState("no builder attached"))?
            .upgrade()
            .ok_or(BuildError::InvalidState("attached builder was dropped"))?;
        let mut builder = builder
            .try_borrow_mut()
            .map_err(|_| BuildError::InvalidState("builder is already borrowed"))?;

        debug!(recipe = %recipe.name, steps = recipe.steps.len(), "running recipe");
        recipe.apply(&mut *builder);
        Ok(())
    }
}
