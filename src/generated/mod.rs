//! Accessor dan builder per tipe skema, bentuk yang sama dengan keluaran code generator.

pub mod namespace_test;

pub use namespace_test::{namespace_a, namespace_c};
