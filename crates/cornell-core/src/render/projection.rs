//! Perspective projection with [0, 1] output depth.

use glam::Mat4;

use crate::math::matrix;

/// Perspective parameters. The matrix is derived once, at pipeline
/// construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    /// 60 degree FOV, 4:3, near 1, far 300 (the box spans z = 0..255).
    fn default() -> Self {
        Self::perspective(core::f32::consts::FRAC_PI_3, 4.0 / 3.0, 1.0, 300.0)
    }
}

impl Projection {
    pub const fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y,
            aspect,
            near,
            far,
        }
    }

    /// Row-major:
    ///
    /// ```text
    /// [ f/aspect  0  0             0                  ]
    /// [ 0         f  0             0                  ]
    /// [ 0         0  far/(far-n)  -far*n/(far-n)      ]
    /// [ 0         0  1             0                  ]
    /// ```
    ///
    /// with `f = 1 / tan(fov_y / 2)`. Clip z lands in `[0, w]` between the
    /// planes.
    pub fn matrix(&self) -> Mat4 {
        let f = 1.0 / libm::tanf(self.fov_y * 0.5);
        let depth = self.far - self.near;
        matrix::from_rows([
            [f / self.aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, self.far / depth, -self.far * self.near / depth],
            [0.0, 0.0, 1.0, 0.0],
        ])
    }
}
