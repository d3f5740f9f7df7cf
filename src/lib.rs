//! # Fluent Builder
//!
//! Step-by-step construction of a composite object, kept apart from the
//! object's final representation.
//!
//! ## Pieces
//!
//! 1. **Product** - an ordered list of part labels
//!    - `add` appends a part
//!    - `describe` renders `Product parts: PartA1, PartB1`
//!
//! 2. **Builders** - own exactly one in-progress product
//!    - `ProductBuilder` assembles a `Product`
//!    - `ManualBuilder` assembles a `Manual` from the same steps
//!    - both implement the `PartBuilder` step vocabulary
//!
//! 3. **Director** - optional step sequencer
//!    - holds a non-owning handle to a shared builder
//!    - runs the minimal, full-featured or any TOML-defined `Recipe`
//!
//! ## Usage
//!
//! ```
//! use fluent_builder::{Director, ProductBuilder};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let builder = Rc::new(RefCell::new(ProductBuilder::new()));
//! let mut director = Director::new();
//! director.set_builder(&builder);
//!
//! director.build_full_featured_product().unwrap();
//! let product = builder.borrow_mut().get_product();
//! assert_eq!(product.describe(), "Product parts: PartA1, PartB1, PartC1");
//! ```
//!
//! ## Running the Demo
//!
//! ```bash
//! cargo run --bin fluent-builder-demo
//! RUST_LOG=fluent_builder=trace cargo run --bin fluent-builder-demo
//! ```

pub mod builder;
pub mod director;
pub mod error;
pub mod manual;
pub mod product;
pub mod recipe;

pub use builder::{PartBuilder, ProductBuilder};
pub use director::Director;
pub use error::BuildError;
pub use manual::{Manual, ManualBuilder};
pub use product::Product;
pub use recipe::{Recipe, Step};
