//! Pattern 3: Factory Method Variants
//! Example: Four Ways to Decide Which Product Gets Built
//!
//! Run with: cargo run --example p3_factory_method

use value_semantics::factory::{
    create, create_custom, Creator, CreatorWithDefault, Gadget, GadgetCreator, GenericCreator,
    ProductKind, StockCreator, Widget, WidgetCreator,
};

fn main() {
    println!("=== Variant 1: Required Hook ===\n");

    // Every implementor of Creator names its own product.
    let creator = WidgetCreator;
    println!("WidgetCreator.create() -> {}", creator.create().label());

    println!("\n=== Variant 2: Stock Hook with Overrides ===\n");

    println!("StockCreator.create()  -> {} (trait default)", StockCreator.create().label());
    println!("GadgetCreator.create() -> {} (overridden)", GadgetCreator.create().label());

    println!("\n=== Variant 3: Generic Creator ===\n");

    let ca: GenericCreator<Widget> = GenericCreator::new();
    let cb: GenericCreator<Gadget> = GenericCreator::new();
    println!("GenericCreator::<Widget> -> {}", ca.create().label());
    println!("GenericCreator::<Gadget> -> {}", cb.create().label());

    println!("\n=== Variant 4: Parameterised Function ===\n");

    for kind in [ProductKind::Widget, ProductKind::Gadget] {
        println!("create({:?}) -> {}", kind, create(kind).label());
    }

    println!();
    for kind in [ProductKind::Widget, ProductKind::Gadget] {
        println!("create_custom({:?}) -> {}", kind, create_custom(kind).label());
    }

    println!("\n=== Creators Behind One Interface ===\n");

    let creators: Vec<Box<dyn Creator>> = vec![
        Box::new(WidgetCreator),
        Box::new(GenericCreator::<Gadget>::new()),
    ];
    for c in &creators {
        println!("-> {}", c.create().label());
    }

    println!("\n=== Key Points ===");
    println!("1. A required hook forces every creator to choose a product");
    println!("2. A provided hook gives a default that impls may override");
    println!("3. A generic creator turns the product type into a parameter");
    println!("4. A closed kind enum makes the parameterised function total");
}
