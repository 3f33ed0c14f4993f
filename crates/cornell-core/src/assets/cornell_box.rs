//! Cornell box mesh in 8-bit model space (0..=255 per axis).
//!
//! Open side faces -z, where the camera starts. Two cubes sit on the floor.

use crate::render::mesh::MeshTriangle;

/// RRRGGGBB white.
pub const WHITE: u8 = 0xFF;
/// RRRGGGBB red.
pub const RED: u8 = 0xE0;
/// RRRGGGBB green.
pub const GREEN: u8 = 0x1C;

const fn tri(v0: [u8; 3], v1: [u8; 3], v2: [u8; 3], color: u8) -> MeshTriangle {
    MeshTriangle::new([v0, v1, v2], color)
}

/// Number of triangles in the Cornell box.
pub const TRIANGLE_COUNT: usize = 34;

/// The scene mesh.
pub static CORNELL_BOX: [MeshTriangle; TRIANGLE_COUNT] = [
    // Floor
    tri([0, 0, 0], [255, 0, 0], [255, 0, 255], WHITE),
    tri([0, 0, 0], [255, 0, 255], [0, 0, 255], WHITE),
    // Ceiling
    tri([0, 255, 0], [255, 255, 255], [255, 255, 0], WHITE),
    tri([0, 255, 0], [0, 255, 255], [255, 255, 255], WHITE),
    // Left wall
    tri([0, 0, 0], [0, 0, 255], [0, 255, 255], RED),
    tri([0, 0, 0], [0, 255, 255], [0, 255, 0], RED),
    // Right wall
    tri([255, 0, 0], [255, 255, 0], [255, 255, 255], GREEN),
    tri([255, 0, 0], [255, 255, 255], [255, 0, 255], GREEN),
    // Back wall
    tri([0, 0, 255], [255, 0, 255], [255, 255, 255], WHITE),
    tri([0, 0, 255], [255, 255, 255], [0, 255, 255], WHITE),
    // Small cube
    tri([51, 0, 102], [102, 0, 102], [102, 0, 153], WHITE),
    tri([51, 0, 102], [102, 0, 153], [51, 0, 153], WHITE),
    tri([51, 51, 102], [102, 51, 153], [102, 51, 102], WHITE),
    tri([51, 51, 102], [51, 51, 153], [102, 51, 153], WHITE),
    tri([51, 0, 102], [51, 51, 102], [102, 51, 102], WHITE),
    tri([51, 0, 102], [102, 51, 102], [102, 0, 102], WHITE),
    tri([51, 0, 153], [102, 0, 153], [102, 51, 153], WHITE),
    tri([51, 0, 153], [102, 51, 153], [51, 51, 153], WHITE),
    tri([51, 0, 102], [51, 0, 153], [51, 51, 153], WHITE),
    tri([51, 0, 102], [51, 51, 153], [51, 51, 102], WHITE),
    tri([102, 0, 102], [102, 51, 102], [102, 51, 153], WHITE),
    tri([102, 0, 102], [102, 51, 153], [102, 0, 153], WHITE),
    // Tall cube
    tri([153, 0, 179], [204, 0, 179], [204, 0, 230], WHITE),
    tri([153, 0, 179], [204, 0, 230], [153, 0, 230], WHITE),
    tri([153, 128, 179], [204, 128, 230], [204, 128, 179], WHITE),
    tri([153, 128, 179], [153, 128, 230], [204, 128, 230], WHITE),
    tri([153, 0, 179], [153, 128, 179], [204, 128, 179], WHITE),
    tri([153, 0, 179], [204, 128, 179], [204, 0, 179], WHITE),
    tri([153, 0, 230], [204, 0, 230], [204, 128, 230], WHITE),
    tri([153, 0, 230], [204, 128, 230], [153, 128, 230], WHITE),
    tri([153, 0, 179], [153, 0, 230], [153, 128, 230], WHITE),
    tri([153, 0, 179], [153, 128, 230], [153, 128, 179], WHITE),
    tri([204, 0, 179], [204, 128, 179], [204, 128, 230], WHITE),
    tri([204, 0, 179], [204, 128, 230], [204, 0, 230], WHITE),
];
