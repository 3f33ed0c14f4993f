//! Orbit camera, projection and view matrix tests.

use core::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::{Vec3, Vec4};

use cornell_core::math::matrix::{to_rows, transform};
use cornell_core::render::projection::Projection;
use cornell_core::scene::camera::{CameraState, OrbitConfig};

fn approx(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}

mod orbit {
    use super::*;

    #[test]
    fn starts_on_the_orbit_at_theta_zero() {
        let cam = CameraState::new(&OrbitConfig::default());
        assert_eq!(cam.theta, 0.0);
        assert_eq!(cam.position, Vec3::new(100.0, 127.5, 0.0));
        assert_eq!(cam.dir, 1.0);
    }

    #[test]
    fn first_advance_places_then_steps() {
        let orbit = OrbitConfig::default();
        let mut cam = CameraState::new(&orbit);
        cam.advance(&orbit);

        // Position uses the angle before the step.
        assert_eq!(cam.position, Vec3::new(100.0, 127.5, 0.0));
        assert!(approx(cam.theta, 0.001, 1e-7));
    }

    #[test]
    fn radius_constant_over_full_sweep() {
        let orbit = OrbitConfig {
            theta_step: TAU / 360.0,
            ..OrbitConfig::default()
        };
        let mut cam = CameraState::new(&orbit);

        for step in 0..360 {
            cam.advance(&orbit);
            let r = cam.orbit_radius();
            assert!(approx(r, 100.0, 1e-3), "step {step}: radius {r}");
            assert_eq!(cam.position.y, 127.5);
        }
    }

    #[test]
    fn quarter_turn_moves_to_positive_z() {
        let orbit = OrbitConfig::default();
        let mut cam = CameraState::new(&orbit);
        cam.theta = FRAC_PI_2;
        cam.advance(&orbit);
        assert!(approx(cam.position.x, 0.0, 1e-3));
        assert!(approx(cam.position.z, 100.0, 1e-3));
    }
}

mod wobble {
    use super::*;

    #[test]
    fn flips_every_frame_outside_window() {
        let orbit = OrbitConfig::default();
        let mut cam = CameraState::new(&orbit);

        // Heading base is theta + pi/2, far outside +-pi/12.
        cam.advance(&orbit);
        assert_eq!(cam.dir, -1.0);
        assert!(approx(cam.yaw, FRAC_PI_2 - 0.5, 1e-6));

        cam.advance(&orbit);
        assert_eq!(cam.dir, 1.0);
        assert!(approx(cam.yaw, FRAC_PI_2 + 0.001 + 0.5, 1e-6));
    }

    #[test]
    fn keeps_sign_inside_window() {
        let orbit = OrbitConfig::default();
        let mut cam = CameraState::new(&orbit);
        cam.theta = -FRAC_PI_2;

        cam.advance(&orbit);
        assert_eq!(cam.dir, 1.0);
        assert!(approx(cam.yaw, 0.5, 1e-6));

        cam.advance(&orbit);
        assert_eq!(cam.dir, 1.0);
        assert!(approx(cam.yaw, 0.501, 1e-5));
    }

    #[test]
    fn flips_below_negative_window() {
        let orbit = OrbitConfig::default();
        let mut cam = CameraState::new(&orbit);
        cam.theta = -FRAC_PI_2 - 1.0;

        cam.advance(&orbit);
        assert_eq!(cam.dir, -1.0);
        assert!(approx(cam.yaw, -1.5, 1e-5));
    }

    #[test]
    fn swing_magnitude_follows_config() {
        let orbit = OrbitConfig {
            yaw_swing: 0.1,
            ..OrbitConfig::default()
        };
        let mut cam = CameraState::new(&orbit);
        cam.advance(&orbit);
        assert!(approx(cam.yaw, FRAC_PI_2 - 0.1, 1e-6));
    }
}

mod view {
    use super::*;

    #[test]
    fn camera_position_maps_to_origin() {
        for yaw in [0.0, 0.7, -1.2, PI / 12.0] {
            let p = Vec3::new(127.5, 127.5, -50.0);
            let view = CameraState::looking_from(p, yaw).view_matrix();
            let eye = transform(&view, p.extend(1.0));
            assert!(eye.truncate().length() < 1e-3, "yaw {yaw}: {eye:?}");
            assert_eq!(eye.w, 1.0);
        }
    }

    #[test]
    fn zero_yaw_looks_down_positive_z() {
        let p = Vec3::new(10.0, 20.0, 30.0);
        let view = CameraState::looking_from(p, 0.0).view_matrix();
        let ahead = transform(&view, Vec4::new(10.0, 20.0, 40.0, 1.0));
        assert_eq!(ahead, Vec4::new(0.0, 0.0, 10.0, 1.0));
    }

    #[test]
    fn rotation_rows_match_yaw() {
        let yaw = 0.3f32;
        let rows = to_rows(&CameraState::looking_from(Vec3::ZERO, yaw).view_matrix());
        assert!(approx(rows[0][0], yaw.cos(), 1e-6));
        assert!(approx(rows[0][2], yaw.sin(), 1e-6));
        assert!(approx(rows[2][0], -yaw.sin(), 1e-6));
        assert!(approx(rows[2][2], yaw.cos(), 1e-6));
        assert_eq!(rows[1], [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(rows[3], [0.0, 0.0, 0.0, 1.0]);
    }
}

mod projection {
    use super::*;

    #[test]
    fn default_is_sixty_degrees_four_by_three() {
        let p = Projection::default();
        assert_eq!(p, Projection::perspective(PI / 3.0, 4.0 / 3.0, 1.0, 300.0));
    }

    #[test]
    fn matrix_entries() {
        let rows = to_rows(&Projection::default().matrix());
        let f = 1.0 / (PI / 6.0).tan();
        assert!(approx(rows[0][0], f * 0.75, 1e-5));
        assert!(approx(rows[1][1], f, 1e-5));
        assert!(approx(rows[2][2], 300.0 / 299.0, 1e-6));
        assert!(approx(rows[2][3], -300.0 / 299.0, 1e-6));
        assert_eq!(rows[3], [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn near_and_far_map_to_depth_range() {
        let m = Projection::default().matrix();
        let near = transform(&m, Vec4::new(0.0, 0.0, 1.0, 1.0));
        let far = transform(&m, Vec4::new(0.0, 0.0, 300.0, 1.0));
        assert!(approx(near.z / near.w, 0.0, 1e-6));
        assert!(approx(far.z / far.w, 1.0, 1e-5));
    }
}
