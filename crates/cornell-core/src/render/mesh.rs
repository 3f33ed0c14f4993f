//! Static mesh storage.

use glam::Vec4;

/// One mesh triangle: three 8-bit model-space vertices and a packed color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeshTriangle {
    pub vertices: [[u8; 3]; 3],
    /// RRRGGGBB.
    pub color: u8,
}

impl MeshTriangle {
    pub const fn new(vertices: [[u8; 3]; 3], color: u8) -> Self {
        Self { vertices, color }
    }

    /// Vertices promoted to homogeneous points (w = 1).
    pub fn model_positions(&self) -> [Vec4; 3] {
        self.vertices
            .map(|[x, y, z]| Vec4::new(x as f32, y as f32, z as f32, 1.0))
    }
}
