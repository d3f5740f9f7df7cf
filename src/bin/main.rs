use anyhow::Result;
use colored::Colorize;
use fluent_builder::{Director, ProductBuilder};
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", "Fluent Builder design pattern example".bold())?;
    writeln!(
        out,
        "Builder is a creational design pattern, which allows constructing complex objects step by step."
    )?;
    writeln!(out)?;

    // The client creates the builder, hands it to the director, and collects
    // the result from the builder afterwards.
    let builder = Rc::new(RefCell::new(ProductBuilder::new()));
    let mut director = Director::new();
    director.set_builder(&builder);

    writeln!(out, "{}", "Standard basic product:".cyan())?;
    director.build_minimal_viable_product()?;
    writeln!(out, "{}\n", builder.borrow_mut().get_product().describe())?;

    writeln!(out, "{}", "Standard full featured product:".cyan())?;
    director.build_full_featured_product()?;
    writeln!(out, "{}\n", builder.borrow_mut().get_product().describe())?;

    // The builder works just as well without a director.
    writeln!(out, "{}", "Custom product:".cyan())?;
    let product = builder.borrow_mut().build_part_a().build_part_c().get_product();
    writeln!(out, "{}", product.describe())?;

    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let stdout = io::stdout();
    run(&mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_prints_three_products_in_order() {
        colored::control::set_override(false);

        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = "\
Fluent Builder design pattern example
Builder is a creational design pattern, which allows constructing complex objects step by step.

Standard basic product:
Product parts: PartA1

Standard full featured product:
Product parts: PartA1, PartB1, PartC1

Custom product:
Product parts: PartA1, PartC1
";
        assert_eq!(text, expected);
    }
}
