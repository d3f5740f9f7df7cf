use crate::product::Product;
use tracing::trace;

pub const PART_A: &str = "PartA1";
pub const PART_B: &str = "PartB1";
pub const PART_C: &str = "PartC1";

/// The step vocabulary shared by every builder.
///
/// Retrieval is left out on purpose: each builder hands back its own product
/// type, and those types need not have anything in common. Steps return a
/// trait object so chains also work through `&mut dyn PartBuilder`.
pub trait PartBuilder {
    fn build_part_a(&mut self) -> &mut dyn PartBuilder;
    fn build_part_b(&mut self) -> &mut dyn PartBuilder;
    fn build_part_c(&mut self) -> &mut dyn PartBuilder;
}

/// Assembles a `Product`, one part per step.
///
/// A builder always has a product in progress. `get_product` hands it over
/// and starts a fresh one in the same call, so the builder can be reused
/// straight away.
#[derive(Debug, Default)]
pub struct ProductBuilder {
    product: Product,
}

impl ProductBuilder {
    pub fn new() -> Self {
        ProductBuilder {
            product: Product::new(),
        }
    }

    pub fn reset(&mut self) {
        self.product = Product::new();
    }

    pub fn build_part_a(&mut self) -> &mut Self {
        self.add_part(PART_A)
    }

    pub fn build_part_b(&mut self) -> &mut Self {
        self.add_part(PART_B)
    }

    pub fn build_part_c(&mut self) -> &mut Self {
        self.add_part(PART_C)
    }

    /// The product currently being assembled.
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[must_use = "the assembled product is dropped if unused"]
    pub fn get_product(&mut self) -> Product {
        // take leaves an empty product behind, same state as reset
        let product = std::mem::take(&mut self.product);
        trace!(parts = product.len(), "product retrieved");
        product
    }

    fn add_part(&mut self, part: &'static str) -> &mut Self {
        trace!(part, "adding part");
        self.product.add(part);
        self
    }
}

impl PartBuilder for ProductBuilder {
    fn build_part_a(&mut self) -> &mut dyn PartBuilder {
        ProductBuilder::build_part_a(self)
    }

    fn build_part_b(&mut self) -> &mut dyn PartBuilder {
        ProductBuilder::build_part_b(self)
    }

    fn build_part_c(&mut self) -> &mut dyn PartBuilder {
        ProductBuilder::build_part_c(self)
    }
}
