//! Pattern 6: Enum and Bit Conversions
//! Example: Discriminants Without Scattered Casts, Bits Without Transmute
//!
//! Run with: cargo run --example p6_conversions

use value_semantics::convert::{bit_cast, try_bit_cast, ToUnderlying};
use value_semantics::factory::ProductKind;

fn main() {
    println!("=== Enum to Underlying Discriminant ===\n");

    for kind in [ProductKind::Widget, ProductKind::Gadget] {
        println!("{:?} -> {}", kind, kind.to_underlying());
    }

    println!("\n=== Bit-for-Bit Reinterpretation ===\n");

    let bits: u32 = bit_cast(1.0f32);
    println!("1.0f32 as bits:    0x{:08x}", bits);
    println!("f32::to_bits says: 0x{:08x}", 1.0f32.to_bits());

    let back: f32 = bit_cast(bits);
    println!("round-tripped:     {}", back);

    let word: u32 = bit_cast([0x01u8, 0x02, 0x03, 0x04]);
    println!("[01 02 03 04] as native-endian u32: 0x{:08x}", word);

    println!("\n=== Size Mismatch Is Checked ===\n");

    match try_bit_cast::<u32, [u8; 2]>(7) {
        Ok(_) => unreachable!("4 bytes cannot become 2"),
        Err(e) => println!("u32 -> [u8; 2] refused: {:?}", e),
    }

    println!("\n=== Key Points ===");
    println!("1. to_underlying() names the intent a bare `as` cast hides");
    println!("2. bit_cast bounds both sides to plain-old-data types");
    println!("3. try_bit_cast returns the size mismatch instead of panicking");
}
