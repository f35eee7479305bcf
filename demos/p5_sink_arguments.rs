//! Pattern 5: Sink Arguments
//! Example: Three Signatures for Arguments That Get Stored
//!
//! Run with: cargo run --example p5_sink_arguments

use value_semantics::sink::Roster;

fn main() {
    println!("=== Pass by Value and Move ===\n");

    let mut roster = Roster::new();

    let name = String::from("ada");
    roster.add_name(name); // moved in, no copy
    println!("moved an owned String in: {:?}", roster.names());

    let keep = String::from("brian");
    roster.add_name(keep.clone()); // caller keeps its value, pays one clone
    println!("caller kept `{}` and passed a clone", keep);

    println!("\n=== Borrow and Clone ===\n");

    roster.add_name_ref("grace");
    println!("borrowed a &str, cloned at the push site: {:?}", roster.names());

    println!("\n=== Generic Sink ===\n");

    roster.add_name_sink("edsger"); // &str
    roster.add_name_sink(String::from("barbara")); // String, moved through
    println!("impl Into<String> accepts both: {:?}", roster.names());

    println!("\n=== Key Points ===");
    println!("1. By value + move: one function, one extra move, simplest code");
    println!("2. Borrow + clone: callers that keep their value pay nothing extra");
    println!("3. impl Into<String>: one signature for &str and String, per-type codegen");
}
