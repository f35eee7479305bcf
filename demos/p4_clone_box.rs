//! Pattern 4: Polymorphic Clone
//! Example: Deep Copies Through a Trait Object
//!
//! Run with: cargo run --example p4_clone_box

use value_semantics::clone_box::{Circle, Element, Square};

fn main() {
    println!("=== Concrete Clones Stay Concrete ===\n");

    let c1 = Circle { radius: 3 };
    let c2: Circle = c1.clone(); // fully typed, no downcast needed
    println!("c1 = {:?}, c2 = c1.clone() = {:?}", c1, c2);

    println!("\n=== Cloning Behind the Trait Object ===\n");

    let boxed: Box<dyn Element> = Box::new(Square { side: 4 });
    let copy = boxed.clone(); // routed through clone_box()
    println!("boxed: {}, copy: {}", boxed.label(), copy.label());

    println!("\n=== A Whole Scene at Once ===\n");

    let scene: Vec<Box<dyn Element>> = vec![
        Box::new(Circle { radius: 1 }),
        Box::new(Square { side: 2 }),
        Box::new(Circle { radius: 8 }),
    ];
    let duplicate = scene.clone();
    for (original, copied) in scene.iter().zip(&duplicate) {
        println!("{} cloned as {}", original.label(), copied.label());
    }

    println!("\n=== Key Points ===");
    println!("1. Clone is not object-safe; clone_box() is the object-safe hook");
    println!("2. impl Clone for Box<dyn Element> delegates to the hook");
    println!("3. Concrete clone() still returns the concrete type");
}
