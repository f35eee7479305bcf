//! Value Semantics & Object Creation Patterns
//!
//! This crate demonstrates value-semantics idioms and classic
//! object-creation patterns in Rust, each in its own self-contained module.
//!
//! ## Patterns Covered
//!
//! 1. **Value Array** - An owned, heap-backed sequence with deep copies and
//!    a well-defined moved-from state
//! 2. **Copy-and-Swap Assignment** - Strong-exception-safe assignment built
//!    from a fully-formed temporary and a constant-time swap
//! 3. **Factory Method** - Four creation variants over one product family
//! 4. **Polymorphic Clone** - Deep copies through a trait object, with
//!    fully-typed concrete clones
//! 5. **Sink Arguments** - Passing strategies for arguments that get stored
//! 6. **Conversions** - Enum discriminants and bit-for-bit reinterpretation
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --example p1_value_array
//! cargo run --example p2_copy_and_swap
//! cargo run --example p3_factory_method
//! cargo run --example p4_clone_box
//! cargo run --example p5_sink_arguments
//! cargo run --example p6_conversions
//! ```

pub mod clone_box;
pub mod convert;
pub mod error;
pub mod factory;
pub mod sink;
pub mod value_array;

pub use error::AllocationError;
pub use value_array::ValueArray;
