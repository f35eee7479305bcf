//! Pattern 1: Value Array Construction and Ownership
//! Example: Sizing, Deep Copies, and the Moved-From State
//!
//! Run with: cargo run --example p1_value_array

use value_semantics::ValueArray;

fn main() {
    println!("=== Construction ===\n");

    let empty = ValueArray::new();
    println!("new():          len={} empty={}", empty.len(), empty.is_empty());

    let zeroed = ValueArray::with_len(5);
    println!("with_len(5):    {:?}", zeroed);

    let sized_zero = ValueArray::with_len(0);
    println!("with_len(0):    len={} (same state as new())", sized_zero.len());

    let from_values = ValueArray::from(vec![1, 2, 3]);
    println!("from(vec):      {:?}", from_values);

    println!("\n=== Deep Copies ===\n");

    let mut a = ValueArray::from(vec![1, 2, 3]);
    let b = a.clone();
    println!("a = {:?}, b = a.clone() = {:?}", a, b);

    a[0] = 99;
    println!("after a[0] = 99:");
    println!("  a = {:?}  (changed)", a);
    println!("  b = {:?}  (independent buffer, unchanged)", b);

    println!("\n=== The Moved-From State ===\n");

    let mut source = ValueArray::from(vec![4, 5, 6]);
    println!("source = {:?}", source);

    let stolen = source.take();
    println!("stolen = source.take() = {:?}", stolen);
    println!("source after take: len={} (forced to the empty state)", source.len());

    // A moved-from array is a normal empty array: reusable.
    source.assign(ValueArray::from(vec![7]));
    println!("source reused:  {:?}", source);

    println!("\n=== Key Points ===");
    println!("1. with_len(n) zero-initializes; with_len(0) is the empty state");
    println!("2. clone() allocates a fresh buffer - copies never alias");
    println!("3. take() transfers the buffer in O(1) and empties the source");
    println!("4. A moved-from array stays valid: droppable and reusable");
}
