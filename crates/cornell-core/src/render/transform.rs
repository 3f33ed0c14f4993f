//! Triangle processor: clip-space transform, culling, perspective divide,
//! viewport mapping and inverse-area setup.

use ::fixed::types::I8F24;
use glam::{Mat4, Vec4};

use crate::math::fixed::{clamp_to_pixel, f32_to_8_24, ndc_depth_to_i16};
use crate::math::matrix;
use crate::render::mesh::MeshTriangle;
use crate::render::{CullReason, ProcessedTriangle, ScreenVertex};

/// Smallest clip-space w accepted for the perspective divide.
pub const MIN_CLIP_W: f32 = 0.0001;

/// Raster target dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: raster_registers::SCREEN_WIDTH,
            height: raster_registers::SCREEN_HEIGHT,
        }
    }
}

/// Transform the triangle's model-space vertices to clip space.
pub fn clip_vertices(tri: &MeshTriangle, projection_view: &Mat4) -> [Vec4; 3] {
    tri.model_positions()
        .map(|v| matrix::transform(projection_view, v))
}

/// Conservative frustum rejection: returns the first plane that all three
/// vertices lie outside of, if any. Partially visible triangles pass.
pub fn frustum_cull(clip: &[Vec4; 3]) -> Option<CullReason> {
    let all = |outside: fn(&Vec4) -> bool| clip.iter().all(outside);

    if all(|v| v.x < -v.w) {
        Some(CullReason::Left)
    } else if all(|v| v.x > v.w) {
        Some(CullReason::Right)
    } else if all(|v| v.y < -v.w) {
        Some(CullReason::Bottom)
    } else if all(|v| v.y > v.w) {
        Some(CullReason::Top)
    } else if all(|v| v.z < 0.0) {
        Some(CullReason::Near)
    } else if all(|v| v.z > v.w) {
        Some(CullReason::Far)
    } else {
        None
    }
}

/// True if any vertex would make the perspective divide unstable.
pub fn has_degenerate_w(clip: &[Vec4; 3]) -> bool {
    clip.iter().any(|v| v.w <= MIN_CLIP_W)
}

/// Perspective divide and viewport mapping of x/y, without clamping.
///
/// `w` must be positive. Coordinates are truncated toward zero and may lie
/// outside the raster; the software reference renderer clips per pixel.
pub fn project_to_screen_unclamped(clip: Vec4, viewport: &Viewport) -> [i32; 2] {
    let inv_w = 1.0 / clip.w;
    let ndc_x = clip.x * inv_w;
    let ndc_y = clip.y * inv_w;

    // NDC y points up, screen rows run down.
    let sx = (ndc_x + 1.0) * (viewport.width as f32 * 0.5);
    let sy = (1.0 - ndc_y) * (viewport.height as f32 * 0.5);

    [sx as i32, sy as i32]
}

/// Perspective divide and viewport mapping for one packet vertex.
///
/// `w` must be positive. X/Y are clamped to the raster so the unsigned
/// packet fields never wrap.
pub fn project_to_screen(clip: Vec4, viewport: &Viewport) -> ScreenVertex {
    let [sx, sy] = project_to_screen_unclamped(clip, viewport);

    ScreenVertex {
        x: clamp_to_pixel(sx, viewport.width.saturating_sub(1)),
        y: clamp_to_pixel(sy, viewport.height.saturating_sub(1)),
        z: ndc_depth_to_i16(clip.z / clip.w),
    }
}

/// Signed double area `x0(y1-y2) + x1(y2-y0) + x2(y0-y1)`, exact.
pub fn double_area(v: &[ScreenVertex; 3]) -> i64 {
    let [(x0, y0), (x1, y1), (x2, y2)] = (*v).map(|p| (p.x as i64, p.y as i64));
    x0 * (y1 - y2) + x1 * (y2 - y0) + x2 * (y0 - y1)
}

/// `|2 / a2|` in Q8.24. Winding does not affect the result.
///
/// `a2` must be non-zero. Integer coordinates keep `|a2| >= 1`, so the
/// result is at most 2.0.
pub fn inverse_double_area(a2: i64) -> I8F24 {
    let r_area = 2.0 / a2.unsigned_abs() as f32;
    f32_to_8_24(r_area)
}

/// Run one mesh triangle through the processor.
///
/// Every `Err` is a silent rejection: the caller counts it and moves on.
pub fn process_triangle(
    tri: &MeshTriangle,
    projection_view: &Mat4,
    viewport: &Viewport,
) -> Result<ProcessedTriangle, CullReason> {
    let clip = clip_vertices(tri, projection_view);

    if let Some(reason) = frustum_cull(&clip) {
        return Err(reason);
    }
    if has_degenerate_w(&clip) {
        return Err(CullReason::DegenerateW);
    }

    let vertices = clip.map(|v| project_to_screen(v, viewport));

    let a2 = double_area(&vertices);
    if a2 == 0 {
        return Err(CullReason::ZeroArea);
    }

    Ok(ProcessedTriangle {
        vertices,
        color: tri.color,
        inv_area: inverse_double_area(a2),
    })
}

/// Unclamped screen outline of a triangle the processor accepts.
///
/// Accepts and rejects exactly as `process_triangle` does. Used by the
/// software reference renderer, which must see off-screen vertices where
/// they really are.
pub fn screen_outline(
    tri: &MeshTriangle,
    projection_view: &Mat4,
    viewport: &Viewport,
) -> Result<[[i32; 2]; 3], CullReason> {
    process_triangle(tri, projection_view, viewport)?;
    Ok(clip_vertices(tri, projection_view).map(|v| project_to_screen_unclamped(v, viewport)))
}
