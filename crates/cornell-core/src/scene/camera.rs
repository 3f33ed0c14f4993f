//! Orbit camera with an oscillating heading.
//!
//! Position follows a circle of fixed radius around the world origin at a
//! fixed height. Heading is derived from the orbit angle and then pushed
//! back and forth by `yaw_swing` whenever it leaves the yaw window, which
//! layers a look-around wobble on top of the dolly.

use core::f32::consts::{FRAC_PI_2, PI};

use glam::{Mat4, Vec2, Vec3};

use crate::math::matrix;

/// Orbit parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitConfig {
    /// Distance from the world origin in the XZ plane.
    pub radius: f32,
    /// Fixed camera Y.
    pub height: f32,
    /// Orbit angle increment per frame, radians.
    pub theta_step: f32,
    /// Magnitude of the heading wobble, radians.
    pub yaw_swing: f32,
    /// Heading half-window; leaving `[-w, +w]` flips the wobble sign.
    pub yaw_window: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            radius: 100.0,
            height: 127.5,
            theta_step: 0.001,
            yaw_swing: 0.5,
            yaw_window: PI / 12.0,
        }
    }
}

/// Per-frame camera state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    /// Orbit angle, radians.
    pub theta: f32,
    /// Derived from `theta` on every advance.
    pub position: Vec3,
    /// Heading about +Y, radians.
    pub yaw: f32,
    /// Wobble sign, +1.0 or -1.0.
    pub dir: f32,
}

impl CameraState {
    /// Camera at theta = 0 on the orbit, heading 0.
    pub fn new(orbit: &OrbitConfig) -> Self {
        Self {
            theta: 0.0,
            position: Vec3::new(orbit.radius, orbit.height, 0.0),
            yaw: 0.0,
            dir: 1.0,
        }
    }

    /// Fixed pose, for snapshots and tests.
    pub fn looking_from(position: Vec3, yaw: f32) -> Self {
        Self {
            theta: 0.0,
            position,
            yaw,
            dir: 1.0,
        }
    }

    /// Advance one frame: place the camera at the current angle, derive the
    /// heading, step the angle, then apply the wobble.
    pub fn advance(&mut self, orbit: &OrbitConfig) {
        self.position.x = orbit.radius * libm::cosf(self.theta);
        self.position.z = orbit.radius * libm::sinf(self.theta);
        self.position.y = orbit.height;

        self.yaw = self.theta + FRAC_PI_2;
        self.theta += orbit.theta_step;

        if self.yaw >= orbit.yaw_window || self.yaw <= -orbit.yaw_window {
            self.dir = -self.dir;
        }
        self.yaw += self.dir * orbit.yaw_swing;
    }

    /// Distance from the orbit axis.
    pub fn orbit_radius(&self) -> f32 {
        Vec2::new(self.position.x, self.position.z).length()
    }

    /// View matrix, rotation about Y with the camera translation folded in:
    ///
    /// ```text
    /// [ cos  0  sin  tx ]   tx = -(cos*cx + sin*cz)
    /// [ 0    1  0    ty ]   ty = -cy
    /// [-sin  0  cos  tz ]   tz = -(-sin*cx + cos*cz)
    /// [ 0    0  0    1  ]
    /// ```
    pub fn view_matrix(&self) -> Mat4 {
        let sin_yaw = libm::sinf(self.yaw);
        let cos_yaw = libm::cosf(self.yaw);
        let (cx, cy, cz) = (self.position.x, self.position.y, self.position.z);

        let tx = -(cos_yaw * cx + sin_yaw * cz);
        let ty = -cy;
        let tz = -(-sin_yaw * cx + cos_yaw * cz);

        matrix::from_rows([
            [cos_yaw, 0.0, sin_yaw, tx],
            [0.0, 1.0, 0.0, ty],
            [-sin_yaw, 0.0, cos_yaw, tz],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}
