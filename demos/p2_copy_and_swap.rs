//! Pattern 2: Copy-and-Swap Assignment
//! Example: One Assignment Body for Copy and Move, with the Strong Guarantee
//!
//! Run with: cargo run --example p2_copy_and_swap

use value_semantics::ValueArray;

fn main() {
    println!("=== One Body, Two Forms ===\n");

    // assign() takes its argument by value: the parameter IS the fully
    // built temporary, and the body is a single swap.
    let mut a = ValueArray::with_len(2);
    let b = ValueArray::from(vec![10, 20, 30]);

    a.assign(b.clone()); // copy form: the clone is the temporary
    println!("copy form:  a = {:?}, b still usable = {:?}", a, b);

    let mut c = ValueArray::new();
    c.assign(b); // move form: b itself is the temporary
    println!("move form:  c = {:?}  (b consumed, no element copies)", c);

    println!("\n=== Self-Assignment Needs No Check ===\n");

    let mut d = ValueArray::from(vec![1, 2, 3]);
    d.assign(d.clone()); // swapping with a copy of yourself is a no-op
    println!("d after d.assign(d.clone()): {:?}", d);

    println!("\n=== Swap Is Constant Time and Infallible ===\n");

    let mut x = ValueArray::from(vec![1, 2]);
    let mut y = ValueArray::from(vec![3, 4, 5]);
    println!("before: x = {:?}, y = {:?}", x, y);

    x.swap(&mut y);
    println!("after:  x = {:?}, y = {:?}", x, y);

    x.swap(&mut y);
    println!("again:  x = {:?}, y = {:?}  (swap is its own inverse)", x, y);

    println!("\n=== The Strong Guarantee ===\n");

    let mut target = ValueArray::from(vec![1, 2, 3]);
    // The temporary is built before the receiver is touched, so a refused
    // allocation leaves the receiver exactly as it was.
    match ValueArray::try_with_len(usize::MAX / 2) {
        Ok(_) => unreachable!("a buffer this large cannot be reserved"),
        Err(e) => println!("oversized construction refused: {}", e),
    }
    println!("target untouched: {:?}", target);

    let replacement = ValueArray::from(vec![8, 9]);
    target
        .try_assign_from(&replacement)
        .expect("small allocation");
    println!("successful try_assign_from: {:?}", target);

    println!("\n=== End-to-End Walkthrough ===\n");

    let mut a = ValueArray::with_len(3);
    println!("a = with_len(3)        -> {:?}", a);

    a.as_mut_slice().copy_from_slice(&[1, 2, 3]);
    println!("fill a                 -> {:?}", a);

    let b = a.clone();
    println!("b = a.clone()          -> {:?}", b);

    a[0] = 99;
    println!("a[0] = 99              -> a = {:?}, b = {:?}", a, b);

    let c = a.take();
    println!("c = a.take()           -> c = {:?}, a.len() = {}", c, a.len());

    a.assign(c.clone());
    println!("a.assign(c.clone())    -> a = {:?}, c = {:?}", a, c);

    println!("\n=== Key Points ===");
    println!("1. The by-value parameter is the temporary; drop releases the old state");
    println!("2. Copy and move assignment share one body - the call site picks");
    println!("3. The receiver never changes unless the temporary was fully built");
    println!("4. swap() never fails and never allocates");
}
