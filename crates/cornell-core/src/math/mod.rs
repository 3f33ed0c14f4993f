//! Matrix kernel and fixed-point conversions.

pub mod fixed;
pub mod matrix;
