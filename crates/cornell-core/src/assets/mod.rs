//! Compile-time scene data.

pub mod cornell_box;
