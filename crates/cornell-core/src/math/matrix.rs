//! 4x4 matrix kernel.
//!
//! Matrices are written row-major at the call sites (the same order the
//! formulas are stated in) and stored as `glam::Mat4`. The product and the
//! transform are the plain row-by-column ones.

use glam::{Mat4, Vec4};

/// Build a matrix from row-major literals.
#[inline]
pub fn from_rows(rows: [[f32; 4]; 4]) -> Mat4 {
    Mat4::from_cols_array_2d(&rows).transpose()
}

/// Row-major view of a matrix.
#[inline]
pub fn to_rows(m: &Mat4) -> [[f32; 4]; 4] {
    m.transpose().to_cols_array_2d()
}

/// `out[r][c] = sum_k a[r][k] * b[k][c]`.
#[inline]
pub fn multiply(a: &Mat4, b: &Mat4) -> Mat4 {
    *a * *b
}

/// `out[r] = sum_c m[r][c] * v[c]`.
#[inline]
pub fn transform(m: &Mat4, v: Vec4) -> Vec4 {
    *m * v
}
