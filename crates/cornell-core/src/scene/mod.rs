//! Scene state owned by the frame loop: the orbit camera and the mesh.

pub mod camera;

use camera::{CameraState, OrbitConfig};

use crate::render::mesh::MeshTriangle;

/// Everything the frame loop mutates or reads besides the sink.
pub struct Scene<'a> {
    pub camera: CameraState,
    pub orbit: OrbitConfig,
    pub mesh: &'a [MeshTriangle],
}

impl<'a> Scene<'a> {
    /// Start the orbit at theta = 0.
    pub fn new(orbit: OrbitConfig, mesh: &'a [MeshTriangle]) -> Self {
        Self {
            camera: CameraState::new(&orbit),
            orbit,
            mesh,
        }
    }

    /// One camera tick.
    pub fn advance(&mut self) {
        self.camera.advance(&self.orbit);
    }
}
