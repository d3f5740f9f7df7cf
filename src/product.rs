use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

const DESCRIPTION_PREFIX: &str = "Product parts: ";

/// The composite object a `ProductBuilder` assembles.
///
/// Parts keep their insertion order and may repeat. Nothing ever removes or
/// reorders a part once it has been added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    parts: Vec<String>,
}

impl Product {
    pub fn new() -> Self {
        Product::default()
    }

    pub fn add(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Human-readable summary, e.g. `Product parts: PartA1, PartC1`.
    ///
    /// An empty product renders as the bare prefix `Product parts: `.
    pub fn describe(&self) -> String {
        if self.parts.is_empty() {
            return DESCRIPTION_PREFIX.to_string();
        }
        format!("{}{}", DESCRIPTION_PREFIX, self.parts.iter().join(", "))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_empty_product() {
        let product = Product::new();
        assert!(product.is_empty());
        assert_eq!(product.describe(), "Product parts: ");
    }

    #[test]
    fn test_describe_single_part() {
        let mut product = Product::new();
        product.add("PartA1");
        assert_eq!(product.describe(), "Product parts: PartA1");
    }

    #[test]
    fn test_describe_keeps_order_and_duplicates() {
        let mut product = Product::new();
        product.add("PartC1");
        product.add("PartA1");
        product.add("PartC1");

        assert_eq!(product.len(), 3);
        assert_eq!(product.describe(), "Product parts: PartC1, PartA1, PartC1");
        assert_eq!(product.parts(), ["PartC1", "PartA1", "PartC1"]);
    }

    #[test]
    fn test_display_matches_describe() {
        let mut product = Product::new();
        product.add("PartB1");
        assert_eq!(product.to_string(), product.describe());
    }

    #[test]
    fn test_json_form() {
        let mut product = Product::new();
        product.add("PartA1");
        product.add("PartB1");

        let json = product.to_json().unwrap();
        assert_eq!(json, r#"{"parts":["PartA1","PartB1"]}"#);

        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
