//! Matrix kernel and fixed-point conversion tests.

use glam::{Mat4, Vec4};

use cornell_core::math::fixed::{f32_to_8_24, clamp_to_pixel, ndc_depth_to_i16};
use cornell_core::math::matrix::{from_rows, multiply, to_rows, transform};

// --- Reference kernels written as plain row-major loops ---

fn reference_multiply(a: &[[f32; 4]; 4], b: &[[f32; 4]; 4]) -> [[f32; 4]; 4] {
    let mut out = [[0.0f32; 4]; 4];
    for r in 0..4 {
        for c in 0..4 {
            let mut dot = 0.0;
            for k in 0..4 {
                dot += a[r][k] * b[k][c];
            }
            out[r][c] = dot;
        }
    }
    out
}

fn reference_transform(m: &[[f32; 4]; 4], v: [f32; 4]) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    for r in 0..4 {
        let mut dot = 0.0;
        for c in 0..4 {
            dot += m[r][c] * v[c];
        }
        out[r] = dot;
    }
    out
}

const A: [[f32; 4]; 4] = [
    [1.0, 2.0, 3.0, 4.0],
    [0.5, -1.0, 0.0, 2.0],
    [-3.0, 0.25, 1.5, 0.0],
    [0.0, 0.0, 1.0, 0.0],
];

const B: [[f32; 4]; 4] = [
    [0.8, 0.0, -0.6, 12.0],
    [0.0, 1.0, 0.0, -127.5],
    [0.6, 0.0, 0.8, 50.0],
    [0.0, 0.0, 0.0, 1.0],
];

fn assert_close(a: f32, b: f32, what: &str) {
    let tol = 1e-4 * a.abs().max(b.abs()).max(1.0);
    assert!((a - b).abs() <= tol, "{what}: {a} vs {b}");
}

mod layout {
    use super::*;

    #[test]
    fn from_rows_keeps_row_major_order() {
        let m = from_rows(A);
        assert_eq!(m.row(0), Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(m.row(3), Vec4::new(0.0, 0.0, 1.0, 0.0));
        assert_eq!(m.col(0), Vec4::new(1.0, 0.5, -3.0, 0.0));
    }

    #[test]
    fn to_rows_inverts_from_rows() {
        assert_eq!(to_rows(&from_rows(B)), B);
    }
}

mod kernel {
    use super::*;

    #[test]
    fn multiply_matches_row_by_column() {
        let expected = reference_multiply(&A, &B);
        let got = to_rows(&multiply(&from_rows(A), &from_rows(B)));
        for r in 0..4 {
            for c in 0..4 {
                assert_close(got[r][c], expected[r][c], &format!("[{r}][{c}]"));
            }
        }
    }

    #[test]
    fn multiply_is_not_commutative() {
        let ab = multiply(&from_rows(A), &from_rows(B));
        let ba = multiply(&from_rows(B), &from_rows(A));
        assert_ne!(ab, ba);
    }

    #[test]
    fn multiply_by_identity_is_noop() {
        let a = from_rows(A);
        assert_eq!(multiply(&a, &Mat4::IDENTITY), a);
        assert_eq!(multiply(&Mat4::IDENTITY, &a), a);
    }

    #[test]
    fn transform_matches_row_dot_vector() {
        let v = [10.0, -20.0, 30.0, 1.0];
        let expected = reference_transform(&B, v);
        let got = transform(&from_rows(B), Vec4::from_array(v)).to_array();
        for r in 0..4 {
            assert_close(got[r], expected[r], &format!("[{r}]"));
        }
    }

    #[test]
    fn transform_applies_translation_column() {
        let translate = from_rows([
            [1.0, 0.0, 0.0, 5.0],
            [0.0, 1.0, 0.0, -3.0],
            [0.0, 0.0, 1.0, 2.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let p = transform(&translate, Vec4::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(p, Vec4::new(6.0, -2.0, 3.0, 1.0));

        // Directions (w = 0) ignore translation.
        let d = transform(&translate, Vec4::new(1.0, 1.0, 1.0, 0.0));
        assert_eq!(d, Vec4::new(1.0, 1.0, 1.0, 0.0));
    }
}

mod q8_24 {
    use super::*;

    #[test]
    fn one_is_two_to_the_24() {
        assert_eq!(f32_to_8_24(1.0).to_bits(), 1 << 24);
        assert_eq!(f32_to_8_24(2.0).to_bits(), 1 << 25);
    }

    #[test]
    fn truncates_toward_zero() {
        let lsb = 1.0 / 16_777_216.0;
        assert_eq!(f32_to_8_24(1.9 * lsb).to_bits(), 1);
        assert_eq!(f32_to_8_24(-0.9 * lsb).to_bits(), 0);
    }

    #[test]
    fn saturates_out_of_range() {
        assert_eq!(f32_to_8_24(1000.0).to_bits(), i32::MAX);
        assert_eq!(f32_to_8_24(-1000.0).to_bits(), i32::MIN);
    }

    #[test]
    fn value_survives_conversion_back() {
        let q = f32_to_8_24(0.25);
        assert_eq!(q.to_num::<f32>(), 0.25);
    }
}

mod pixels {
    use super::*;

    #[test]
    fn passes_inside_range() {
        assert_eq!(clamp_to_pixel(12, 319), 12);
        assert_eq!(clamp_to_pixel(0, 319), 0);
        assert_eq!(clamp_to_pixel(319, 319), 319);
    }

    #[test]
    fn clamps_to_raster() {
        assert_eq!(clamp_to_pixel(-5, 319), 0);
        assert_eq!(clamp_to_pixel(400, 319), 319);
        assert_eq!(clamp_to_pixel(i32::MAX, 239), 239);
    }

    #[test]
    fn depth_scales_by_255() {
        assert_eq!(ndc_depth_to_i16(0.0), 0);
        assert_eq!(ndc_depth_to_i16(0.5), 127);
        assert_eq!(ndc_depth_to_i16(1.0), 255);
        assert_eq!(ndc_depth_to_i16(-0.1), -25);
    }
}
